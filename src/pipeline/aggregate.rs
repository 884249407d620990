// src/pipeline/aggregate.rs

//! Catalog aggregator: scrape on first use, then serve from cache.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::models::{Catalog, Config};
use crate::pipeline::{CatalogCache, scrape_catalog};
use crate::services::{CourseExtractor, HttpPageFetcher, PageFetcher};

/// Owns the fetcher, the extractor and the catalog cache.
pub struct Aggregator {
    fetcher: Arc<dyn PageFetcher>,
    extractor: CourseExtractor,
    max_pages: u32,
    cache: CatalogCache,
}

impl Aggregator {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: CourseExtractor,
        max_pages: u32,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            max_pages,
            cache: CatalogCache::new(ttl),
        }
    }

    /// Build an aggregator that scrapes the configured site over HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config)?;
        let extractor = CourseExtractor::new(&config.selectors)?;
        Ok(Self::new(
            Arc::new(fetcher),
            extractor,
            config.site.max_pages,
            config.cache.ttl(),
        ))
    }

    /// The cached catalog, scraping first if the cache is empty or expired.
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.cache
            .get_or_load(|| async move {
                log::info!("Scraping up to {} pages", self.max_pages);
                let catalog =
                    scrape_catalog(self.fetcher.as_ref(), &self.extractor, self.max_pages).await;
                log::info!(
                    "Catalog ready: {} courses from {} pages",
                    catalog.len(),
                    catalog.report.pages_fetched
                );
                catalog
            })
            .await
    }

    /// Drop the cached catalog and scrape again.
    pub async fn refresh(&self) -> Arc<Catalog> {
        self.cache.invalidate().await;
        self.catalog().await
    }
}
