use crate::prelude::*;

use crate::components::svg::{Bell, DrawSvg, Magnify, Menu, SvgSize::Size5};

/// Actions the header offers to the rest of the application.
///
/// None of them touches the catalog. The [`StorefrontHooks::logging`] set only
/// writes to the log, navigation is meant to be plugged here.
#[derive(Clone, Copy, PartialEq)]
pub struct StorefrontHooks {
    pub on_menu_press: Callback<()>,
    pub on_search_submit: Callback<String>,
    pub on_notifications_press: Callback<()>,
}

impl StorefrontHooks {
    /// Hooks that only log. Must be called from within a component.
    pub fn logging() -> Self {
        Self {
            on_menu_press: Callback::new(|_| log::info!("menu")),
            on_search_submit: Callback::new(|query: String| log::info!("search: {query:?}")),
            on_notifications_press: Callback::new(|_| log::info!("notifications")),
        }
    }
}

#[component]
pub fn Header(hooks: StorefrontHooks) -> Element {
    log::debug!("Header Rendered");

    let mut query = use_signal(String::new);

    use_drop(|| log::debug!("Header Dropped"));

    rsx! {
        header { class: "header",
            button {
                class: "icon-button",
                onclick: move |_| hooks.on_menu_press.call(()),
                DrawSvg::<Menu> { base_class: "icon" }
            }
            div { class: "search-container",
                button {
                    class: "icon-button",
                    onclick: move |_| hooks.on_search_submit.call(query()),
                    DrawSvg::<Magnify> { base_class: "search-icon", size: Size5 }
                }
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search",
                    value: "{query}",
                    oninput: move |event| query.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            hooks.on_search_submit.call(query());
                        }
                    },
                }
            }
            button {
                class: "icon-button",
                onclick: move |_| hooks.on_notifications_press.call(()),
                DrawSvg::<Bell> { base_class: "icon", size: Size5 }
            }
        }
    }
}
