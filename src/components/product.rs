use crate::prelude::*;

use crate::{
    catalog::{Catalog, Product},
    components::svg::{DrawSvg, Star, SvgSize::Size4},
    utils::CCStr,
};

/// What a product list row displays.
#[derive(Debug, Clone, PartialEq)]
pub struct UIProductRow {
    image: CCStr,
    title: CCStr,
    rate: f64,
    price: String,
}
impl UIProductRow {
    pub fn new(product: &Product, currency_suffix: &str) -> Self {
        Self {
            image: product.image.clone(),
            title: product.title.clone(),
            rate: product.rating.rate,
            price: product.price_label(currency_suffix),
        }
    }
}

#[component]
fn ProductRow(row: UIProductRow) -> Element {
    rsx! {
        li { class: "product-container",
            img {
                class: "product-image",
                src: "{row.image}",
                alt: "{row.title}",
            }
            div { class: "product-info",
                p { class: "product-title", "{row.title}" }
                div { class: "price-row",
                    div { class: "rating-container",
                        span { class: "rating", "{row.rate}" }
                        DrawSvg::<Star> { size: Size4 }
                    }
                    span { class: "price", {row.price} }
                }
            }
        }
    }
}

/// One row per catalog product, in catalog order.
#[component]
pub fn ProductList(catalog: Catalog, currency_suffix: CCStr) -> Element {
    log::debug!("ProductList Rendered ({} products)", catalog.len());

    rsx! {
        ul { class: "product-list",
            for (key , product) in catalog.rows() {
                ProductRow { key: "{key}", row: UIProductRow::new(product, &currency_suffix) }
            }
        }
    }
}
