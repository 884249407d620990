// src/pipeline/scrape.rs

//! Sequential page loop that builds the catalog.

use crate::models::{Catalog, ScrapeReport, StopReason};
use crate::services::{CourseExtractor, PageFetch, PageFetcher};

/// Fetch pages `1..=max_pages` in order and extract their courses.
///
/// The loop stops at the first page that does not come back with HTTP 200;
/// later pages are never requested.
pub async fn scrape_catalog(
    fetcher: &dyn PageFetcher,
    extractor: &CourseExtractor,
    max_pages: u32,
) -> Catalog {
    let mut courses = Vec::new();
    let mut malformed = Vec::new();
    let mut pages_fetched = 0;
    let mut stop = StopReason::Exhausted;

    for page in 1..=max_pages {
        match fetcher.fetch_page(page).await {
            PageFetch::Page(html) => {
                let extraction = extractor.extract(&html, page);
                log::info!(
                    "Page {}/{}: {} courses",
                    page,
                    max_pages,
                    extraction.courses.len()
                );
                courses.extend(extraction.courses);
                malformed.extend(extraction.malformed);
                pages_fetched += 1;
            }
            PageFetch::End { status } => {
                log::info!("Page {} answered HTTP {}, end of listing", page, status);
                stop = StopReason::EndOfPages { page, status };
                break;
            }
            PageFetch::Unreachable { reason } => {
                log::warn!("Page {} unreachable, stopping: {}", page, reason);
                stop = StopReason::Unreachable { page, reason };
                break;
            }
        }
    }

    if !malformed.is_empty() {
        log::warn!("Skipped {} malformed cards", malformed.len());
    }

    Catalog::new(
        courses,
        ScrapeReport {
            pages_fetched,
            stop,
            malformed,
        },
    )
}
