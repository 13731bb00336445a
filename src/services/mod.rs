// Service exports
pub mod cache;
pub mod catalog;
pub mod extraction;

pub use cache::{CacheKey, CatalogCache, Snapshot};
pub use catalog::{parse_catalog, CatalogClient, CatalogError, CatalogSource};
pub use extraction::{PlainTextExtractor, TextExtractor};
