// src/pipeline/cache.rs

//! Catalog cache.
//!
//! Holds the most recent catalog. Without a TTL the entry lives for the
//! process lifetime; with one it is rebuilt on the first read after expiry.
//! [`CatalogCache::invalidate`] drops the entry immediately.
//!
//! Loads are serialized through an async mutex, so concurrent readers of an
//! empty cache wait for a single load instead of each scraping.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::models::Catalog;

struct Entry {
    catalog: Arc<Catalog>,
    loaded_at: Instant,
}

/// Single-slot cache for the scraped catalog.
pub struct CatalogCache {
    ttl: Option<Duration>,
    slot: Mutex<Option<Entry>>,
}

impl CatalogCache {
    /// Create an empty cache. `None` keeps entries for the process lifetime.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached catalog, running `load` if there is no fresh entry.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Arc<Catalog>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Catalog>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if self.is_fresh(entry) {
                return Arc::clone(&entry.catalog);
            }
            log::info!("Cached catalog expired, reloading");
        }

        let catalog = Arc::new(load().await);
        *slot = Some(Entry {
            catalog: Arc::clone(&catalog),
            loaded_at: Instant::now(),
        });
        catalog
    }

    /// Drop the cached catalog so the next read scrapes again.
    pub async fn invalidate(&self) {
        if self.slot.lock().await.take().is_some() {
            log::info!("Catalog cache invalidated");
        }
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        match self.ttl {
            Some(ttl) => entry.loaded_at.elapsed() < ttl,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::{Course, ScrapeReport, StopReason};

    fn catalog(title: &str) -> Catalog {
        Catalog::new(
            vec![Course {
                title: title.to_string(),
                category: "Category".to_string(),
                reviews: "No reviews".to_string(),
                rating: 0,
                lessons: "No lessons".to_string(),
                price: "Free".to_string(),
                image: "https://cdn.example.com/x.png".to_string(),
                link: "/courses/x".to_string(),
            }],
            ScrapeReport {
                pages_fetched: 1,
                stop: StopReason::Exhausted,
                malformed: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_second_read_is_memoized() {
        let cache = CatalogCache::new(None);
        let counter = AtomicUsize::new(0);
        let loads = &counter;

        let first = cache
            .get_or_load(|| async move {
                loads.fetch_add(1, Ordering::SeqCst);
                catalog("v1")
            })
            .await;
        // The "site" changed, but the cache still answers with v1.
        let second = cache
            .get_or_load(|| async move {
                loads.fetch_add(1, Ordering::SeqCst);
                catalog("v2")
            })
            .await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(second.courses[0].title, "v1");
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let cache = CatalogCache::new(None);
        cache.get_or_load(|| async { catalog("v1") }).await;

        cache.invalidate().await;

        let reloaded = cache.get_or_load(|| async { catalog("v2") }).await;
        assert_eq!(reloaded.courses[0].title, "v2");
    }

    #[tokio::test]
    async fn test_ttl_expiry_reloads() {
        let cache = CatalogCache::new(Some(Duration::from_millis(20)));
        cache.get_or_load(|| async { catalog("v1") }).await;

        tokio::time::sleep(Duration::from_millis(40)).await;

        let reloaded = cache.get_or_load(|| async { catalog("v2") }).await;
        assert_eq!(reloaded.courses[0].title, "v2");
    }

    #[tokio::test]
    async fn test_concurrent_reads_load_once() {
        let cache = Arc::new(CatalogCache::new(None));
        let loads = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let loads = Arc::clone(&loads);
                tokio::spawn(async move {
                    cache
                        .get_or_load(|| async move {
                            loads.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(10)).await;
                            catalog("v1")
                        })
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}
