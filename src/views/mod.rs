pub mod storefront;
