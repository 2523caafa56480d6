use crate::prelude::*;

use crate::{
    catalog::{Catalog, HttpCatalogSource},
    components::{
        banner::{Banner, UIBanner},
        header::{Header, StorefrontHooks},
        product::ProductList,
        trust_strip::{trust_cell_width, TrustStrip},
    },
    config::StorefrontConfig,
};

#[component]
pub fn StorefrontView() -> Element {
    log::debug!("StorefrontView Rendered");

    let config = use_context::<StorefrontConfig>();

    let endpoint = config.endpoint.clone();
    let catalog_state =
        helper_hooks::use_catalog_loader(move || HttpCatalogSource::new(endpoint));
    let viewport_width = helper_hooks::use_viewport_width(config.default_viewport_width);
    let hooks = use_hook(StorefrontHooks::logging);

    if !catalog_state.read().is_loaded() {
        log::debug!("StorefrontView - catalog not loaded yet");
    }

    use_drop(|| log::debug!("StorefrontView Dropped"));

    rsx! {
        StorefrontScreen {
            catalog: catalog_state.read().catalog(),
            viewport_width: viewport_width(),
            hooks,
        }
    }
}

/// The whole screen, computed from the catalog and the viewport width only.
#[component]
pub fn StorefrontScreen(
    catalog: Catalog,
    viewport_width: f64,
    hooks: StorefrontHooks,
) -> Element {
    let config = use_context::<StorefrontConfig>();

    let banner = catalog
        .banner_product(config.banner_index)
        .map(|product| UIBanner::new(product, viewport_width));
    let cell_width = trust_cell_width(viewport_width, config.trust_strip_gutter);

    rsx! {
        div { class: "container",
            Header { hooks }
            Banner { banner }
            TrustStrip { cell_width }
            ProductList { catalog, currency_suffix: config.currency_suffix.clone() }
        }
    }
}
