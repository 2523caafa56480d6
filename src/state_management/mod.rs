mod catalog;

#[cfg(test)]
pub(crate) use catalog::test_sources;

pub mod prelude {
    pub use super::catalog::CatalogState;

    pub mod state_management {
        pub use super::super::catalog::fetch_catalog;
    }
}
