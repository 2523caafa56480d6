pub mod banner;
pub mod header;
pub mod product;
pub mod svg;
pub mod trust_strip;
