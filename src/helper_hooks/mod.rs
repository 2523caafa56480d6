mod catalog;
mod viewport;

pub mod prelude {
    pub mod helper_hooks {
        pub use super::super::catalog::use_catalog_loader;
        pub use super::super::viewport::use_viewport_width;
    }
}
