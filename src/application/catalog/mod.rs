mod catalog_service;
mod errors;
mod sample;

pub use catalog_service::Catalog;
pub use errors::{CatalogError, Result};
pub use sample::sample_catalog;
