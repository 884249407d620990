// src/models/mod.rs

//! Domain models for the course search application.

mod catalog;
mod config;
mod course;
mod selectors;

// Re-export all public types
pub use catalog::{COLUMNS, Catalog, MalformedCard, ScrapeReport, StopReason};
pub use config::{
    CacheConfig, Config, CrawlerConfig, PAGE_PLACEHOLDER, ServerConfig, SiteConfig,
};
pub use course::{Course, FREE_PRICE, MAX_RATING, NO_LESSONS, NO_REVIEWS, UNKNOWN_PRICE};
pub use selectors::{CompiledSelectors, CourseSelectors};
