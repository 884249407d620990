// src/services/fetcher.rs

//! Listing page fetcher.
//!
//! Fetches one listing page per call. A non-200 answer ends pagination; a
//! transport error or 5xx answer is retried with linear backoff before the
//! page is declared unreachable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::Result;
use crate::models::{Config, SiteConfig};
use crate::utils::http;

/// Outcome of fetching a single listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFetch {
    /// HTTP 200 with the page markup
    Page(String),

    /// A non-200 status that marks the end of the listing
    End { status: u16 },

    /// The page could not be retrieved after all attempts
    Unreachable { reason: String },
}

/// Source of listing pages, indexed from 1.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> PageFetch;
}

/// Result of one HTTP attempt, before retry handling.
enum Attempt {
    Done(PageFetch),
    Retry(String),
}

/// Fetches listing pages over HTTP.
pub struct HttpPageFetcher {
    client: Client,
    site: SiteConfig,
    retry_attempts: u32,
    retry_backoff: Duration,
}

impl HttpPageFetcher {
    /// Create a fetcher with a client configured from `config.crawler`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: http::create_client(&config.crawler)?,
            site: config.site.clone(),
            retry_attempts: config.crawler.retry_attempts,
            retry_backoff: Duration::from_millis(config.crawler.retry_backoff_ms),
        })
    }

    async fn attempt(&self, url: &str) -> Attempt {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return Attempt::Retry(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::OK {
            match response.text().await {
                Ok(body) => Attempt::Done(PageFetch::Page(body)),
                Err(e) => Attempt::Retry(e.to_string()),
            }
        } else if status.is_server_error() {
            Attempt::Retry(format!("HTTP {}", status.as_u16()))
        } else {
            Attempt::Done(PageFetch::End {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page: u32) -> PageFetch {
        let url = self.site.page_url(page);
        let mut last_reason = String::new();

        for attempt in 0..=self.retry_attempts {
            if attempt > 0 {
                let delay = self.retry_backoff * attempt;
                log::debug!(
                    "Retrying page {} in {:?} (attempt {}/{})",
                    page,
                    delay,
                    attempt,
                    self.retry_attempts
                );
                tokio::time::sleep(delay).await;
            }

            match self.attempt(&url).await {
                Attempt::Done(fetch) => return fetch,
                Attempt::Retry(reason) => {
                    log::debug!("Fetch of {} failed: {}", url, reason);
                    last_reason = reason;
                }
            }
        }

        PageFetch::Unreachable {
            reason: last_reason,
        }
    }
}
