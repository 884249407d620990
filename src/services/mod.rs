//! Service layer for the course search application.
//!
//! This module contains the business logic for:
//! - Listing page fetching (`HttpPageFetcher`)
//! - Course card extraction (`CourseExtractor`)
//! - Category and title filtering (`filter_courses`)
//! - Fuzzy title suggestions (`suggest`)

mod extractor;
mod fetcher;
pub mod filter;
pub mod suggest;

pub use extractor::{CourseExtractor, PageExtraction};
pub use fetcher::{HttpPageFetcher, PageFetch, PageFetcher};
pub use filter::{CategoryFilter, filter_by_category, filter_courses};
pub use suggest::suggest;
