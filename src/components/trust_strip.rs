use crate::prelude::*;

use crate::components::svg::{AttachMoney, CardsHeart, CheckCircle, DrawSvg};

/// Width of each of the three trust strip cells.
pub fn trust_cell_width(viewport_width: f64, gutter: f64) -> f64 {
    (viewport_width - gutter) / 3.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrustIcon {
    Guaranteed,
    CashOnDelivery,
    FreeReturns,
}
impl TrustIcon {
    fn label(self) -> &'static str {
        match self {
            TrustIcon::Guaranteed => "100% Guaranteed",
            TrustIcon::CashOnDelivery => "Cash on Delivery",
            TrustIcon::FreeReturns => "Free Returns",
        }
    }
}

const TRUST_ITEMS: [TrustIcon; 3] = [
    TrustIcon::Guaranteed,
    TrustIcon::CashOnDelivery,
    TrustIcon::FreeReturns,
];

#[component]
pub fn TrustStrip(cell_width: f64) -> Element {
    rsx! {
        div { class: "trust-strip",
            for item in TRUST_ITEMS {
                div {
                    key: "{item.label()}",
                    class: "trust-cell",
                    style: "width: {cell_width}px;",
                    {
                        match item {
                            TrustIcon::Guaranteed => rsx! {
                                DrawSvg::<CheckCircle> { base_class: "icon" }
                            },
                            TrustIcon::CashOnDelivery => rsx! {
                                DrawSvg::<AttachMoney> { base_class: "icon" }
                            },
                            TrustIcon::FreeReturns => rsx! {
                                DrawSvg::<CardsHeart> { base_class: "icon" }
                            },
                        }
                    }
                    span { class: "trust-label", {item.label()} }
                }
            }
        }
    }
}
