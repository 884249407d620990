//! Pipeline stages that turn listing pages into a cached catalog.
//!
//! - `scrape_catalog`: Fetch pages in order and extract their courses
//! - `CatalogCache`: Keep the last catalog until it expires or is invalidated
//! - `Aggregator`: Tie both together behind `catalog()` / `refresh()`

pub mod aggregate;
pub mod cache;
pub mod scrape;

pub use aggregate::Aggregator;
pub use cache::CatalogCache;
pub use scrape::scrape_catalog;
