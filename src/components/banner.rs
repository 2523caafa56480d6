use crate::prelude::*;

use crate::{catalog::Product, utils::CCStr};

const BANNER_HEIGHT: u32 = 300;

/// The promotional banner: a full width product picture with a sale badge.
#[derive(Debug, Clone, PartialEq)]
pub struct UIBanner {
    image: CCStr,
    title: CCStr,
    width: f64,
}
impl UIBanner {
    pub fn new(product: &Product, width: f64) -> Self {
        Self {
            image: product.image.clone(),
            title: product.title.clone(),
            width,
        }
    }
}

impl LoadedElement for UIBanner {
    fn element(self) -> Element {
        rsx! {
            div { class: "banner",
                img {
                    class: "banner-image",
                    src: "{self.image}",
                    alt: "{self.title}",
                    style: "width: {self.width}px; height: {BANNER_HEIGHT}px;",
                }
                div { class: "sale-container",
                    div { class: "sale-amount",
                        span { class: "sale-amount-text", "50%" }
                    }
                    span { class: "sale-text", "Special SALE" }
                }
            }
        }
    }

    fn place_holder() -> Element {
        rsx! {
            p { class: "banner-placeholder", "Loading banner..." }
        }
    }
}

#[component]
pub fn Banner(banner: Option<UIBanner>) -> Element {
    let input: LoadedComponentInput<UIBanner> = banner.into();
    rsx! {
        div { class: "banner-region",
            LoadedComponent::<UIBanner> { input }
        }
    }
}
