use std::future::Future;

use crate::utils::CCStr;

use super::{decode_catalog, Catalog, CatalogError};

/// Something able to produce the product catalog.
///
/// The screen only ever calls [`CatalogSource::fetch_products`] once.
pub trait CatalogSource: 'static {
    fn fetch_products(&self) -> impl Future<Output = Result<Catalog, CatalogError>>;
}

/// Retrieves the catalog with a plain `GET` on a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: CCStr,
}

impl HttpCatalogSource {
    pub fn new(endpoint: CCStr) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Catalog, CatalogError> {
        log::debug!("HttpCatalogSource::fetch_products - GET {}", self.endpoint);
        let response = self.client.get(&*self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        log::debug!(
            "HttpCatalogSource::fetch_products - received {} bytes",
            body.len()
        );
        decode_catalog(&body)
    }
}
