use crate::utils::CCStr;

/// Product listing endpoint queried once per screen lifetime.
pub const PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Static settings of the storefront screen.
///
/// Provided once by the `App` root through the Dioxus context; nothing
/// reads it from disk or from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// URL of the product listing
    pub endpoint: CCStr,
    /// Appended to every formatted price
    pub currency_suffix: CCStr,
    /// Position in the catalog of the product shown in the promotional banner
    pub banner_index: usize,
    /// Viewport width used until the renderer reports the real one
    pub default_viewport_width: f64,
    /// Horizontal space of the trust strip not shared between its cells
    pub trust_strip_gutter: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: CCStr::from(PRODUCTS_ENDPOINT),
            currency_suffix: CCStr::from("TL"),
            banner_index: 19,
            default_viewport_width: 375.0,
            trust_strip_gutter: 20.0,
        }
    }
}
