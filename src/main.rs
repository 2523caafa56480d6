#![windows_subsystem = "windows"]
mod catalog;
mod components;
mod config;
mod helper_hooks;
mod loaded;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::helper_hooks::prelude::*;
    pub use super::loaded::prelude::*;
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use prelude::*;

use config::StorefrontConfig;
use views::storefront::StorefrontView;

static TITLE: &str = "Storefront";

const STYLESHEET: Asset = asset!("/assets/storefront.css");

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    use_context_provider(StorefrontConfig::default);

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: STYLESHEET }

        div { id: "app", StorefrontView {} }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting app");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title(TITLE)
                        .with_inner_size(LogicalSize::new(414, 896))
                        .with_resizable(true),
                ),
            )
            .launch(App)
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App)
}
