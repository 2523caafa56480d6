//! # Catalog Module
//!
//! The product records received from the remote listing and the ordered
//! [`Catalog`] holding them.
//!
//! The catalog is kept in response order, without deduplication: two products
//! may share an `id`, which is why list rows are keyed by `id` and position
//! (see [`row_key`]).

use serde::Deserialize;

use crate::utils::{CCStr, CheapClone};

mod source;

pub use source::{CatalogSource, HttpCatalogSource};

/// Errors that can occur while retrieving the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog request returned HTTP status {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A product as returned by the remote listing.
///
/// `description` and `category` are decoded but not displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: CCStr,
    pub price: f64,
    pub description: CCStr,
    pub category: CCStr,
    pub rating: Rating,
    pub image: CCStr,
}

impl Product {
    /// Price with exactly two decimals followed by `currency_suffix`.
    ///
    /// ```ignore
    /// assert_eq!(product.price_label("TL"), "12.50TL"); // price: 12.5
    /// ```
    pub fn price_label(&self, currency_suffix: &str) -> String {
        format!("{}{currency_suffix}", two_decimals(self.price))
    }
}

/// Formats a non-negative `value` with two decimals, exact ties going up.
///
/// `{:.2}` breaks exact ties to even. The only values sitting exactly halfway
/// between two cents are odd multiples of 1/8 (`0.125`, `1.375`...), for which
/// the upper neighbour is picked instead.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        format!("{:.2}", (value * 100.0).ceil() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

/// Rendering key of the product displayed at `index`.
pub fn row_key(product: &Product, index: usize) -> String {
    format!("{}-{index}", product.id)
}

/// Ordered, cheaply clonable sequence of [`Product`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog(CheapClone<[Product]>);

impl Default for Catalog {
    fn default() -> Self {
        Self(CheapClone::from(Vec::new()))
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(value: Vec<Product>) -> Self {
        Self(CheapClone::from(value))
    }
}

impl core::ops::Deref for Catalog {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Catalog {
    /// The product featured in the promotional banner, if the catalog is long
    /// enough to have one.
    pub fn banner_product(&self, banner_index: usize) -> Option<&Product> {
        self.0.get(banner_index)
    }

    /// Products in response order, paired with their rendering key.
    pub fn rows(&self) -> impl Iterator<Item = (String, &Product)> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, product)| (row_key(product, index), product))
    }
}

/// Decodes a JSON array of products, keeping the array order.
pub fn decode_catalog(body: &[u8]) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;

    use super::*;

    pub fn product(id: i64, price: f64) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Product {id}"),
            "price": price,
            "description": "description",
            "category": "electronics",
            "rating": { "rate": 4.1, "count": 259 },
            "image": format!("https://fakestoreapi.com/img/{id}.jpg"),
        }))
        .unwrap()
    }

    /// `len` products with ids `1..=len`.
    pub fn catalog(len: usize) -> Catalog {
        (1..=len as i64)
            .map(|id| product(id, id as f64 * 10.0))
            .collect::<Vec<_>>()
            .into()
    }
}
