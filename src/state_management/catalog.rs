use crate::{
    catalog::{Catalog, CatalogSource},
    utils::log_error,
};

/// State of the catalog for the lifetime of the storefront screen.
///
/// `Empty` until the one and only fetch succeeds, then `Loaded` for good.
/// There is no error state: a failed fetch leaves the state `Empty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Empty,
    Loaded(Catalog),
}

impl CatalogState {
    /// Products to display, empty while nothing was loaded.
    pub fn catalog(&self) -> Catalog {
        match self {
            CatalogState::Empty => Catalog::default(),
            CatalogState::Loaded(catalog) => catalog.clone(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    /// Returns the state following the arrival of `catalog`.
    ///
    /// `Loaded` is terminal: a catalog arriving after the first one is dropped.
    pub fn loaded(self, catalog: Catalog) -> Self {
        match self {
            CatalogState::Empty => CatalogState::Loaded(catalog),
            CatalogState::Loaded(current) => {
                log::warn!(
                    "catalog already loaded, ignoring a new catalog of {} products",
                    catalog.len()
                );
                CatalogState::Loaded(current)
            }
        }
    }
}

/// Performs the catalog fetch, returning `None` if it failed for any reason.
///
/// Failures are logged and otherwise swallowed.
pub async fn fetch_catalog<S: CatalogSource>(source: &S) -> Option<Catalog> {
    log::info!("catalog_loader - fetching products");
    match source.fetch_products().await {
        Ok(catalog) => {
            log::info!("catalog_loader - {} products received", catalog.len());
            Some(catalog)
        }
        Err(e) => {
            log_error(e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_sources {
    use crate::catalog::{decode_catalog, Catalog, CatalogError, CatalogSource};

    /// In-memory [`CatalogSource`] answering immediately.
    #[derive(Debug, Clone, PartialEq)]
    pub enum StubSource {
        Products(Catalog),
        Body(&'static str),
        Status(u16),
    }

    impl CatalogSource for StubSource {
        async fn fetch_products(&self) -> Result<Catalog, CatalogError> {
            match self {
                StubSource::Products(catalog) => Ok(catalog.clone()),
                StubSource::Body(body) => decode_catalog(body.as_bytes()),
                StubSource::Status(status) => Err(CatalogError::Status(*status)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_sources::StubSource;
    use super::*;
    use crate::catalog::fixtures;

    #[tokio::test]
    async fn successful_fetch_yields_the_whole_catalog() {
        let expected = fixtures::catalog(20);
        let fetched = fetch_catalog(&StubSource::Products(expected.clone())).await;
        assert_eq!(fetched, Some(expected));
    }

    #[tokio::test]
    async fn rejected_fetch_yields_nothing() {
        assert_eq!(fetch_catalog(&StubSource::Status(500)).await, None);
        assert_eq!(fetch_catalog(&StubSource::Body("{\"oops\": true")).await, None);
    }

    #[test]
    fn loaded_is_terminal() {
        let first = fixtures::catalog(3);
        let state = CatalogState::Empty.loaded(first.clone());
        assert!(state.is_loaded());

        let state = state.loaded(fixtures::catalog(25));
        assert_eq!(state, CatalogState::Loaded(first));
    }

    #[test]
    fn empty_state_has_no_products() {
        assert!(!CatalogState::Empty.is_loaded());
        assert_eq!(CatalogState::Empty.catalog(), Catalog::default());
    }
}
