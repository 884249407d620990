//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::CourseSelectors;
use crate::utils::resolve_url;

/// Placeholder replaced by the page index in [`SiteConfig::listing_url`].
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP client behavior
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CSS selectors for course cards
    #[serde(default)]
    pub selectors: CourseSelectors,

    /// Catalog cache policy
    #[serde(default)]
    pub cache: CacheConfig,

    /// Browser UI server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.site.validate()?;

        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.cache.ttl_secs == Some(0) {
            return Err(AppError::validation("cache.ttl_secs must be > 0 when set"));
        }
        if self.server.addr.trim().is_empty() {
            return Err(AppError::validation("server.addr is empty"));
        }

        self.selectors.compile()?;
        Ok(())
    }
}

/// Target site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin that relative course links are joined with
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Listing URL template containing `{page}`
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// Highest page index to request
    #[serde(default = "defaults::max_pages")]
    pub max_pages: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            listing_url: defaults::listing_url(),
            max_pages: defaults::max_pages(),
        }
    }
}

impl SiteConfig {
    /// Listing URL for a 1-based page index.
    pub fn page_url(&self, page: u32) -> String {
        self.listing_url
            .replace(PAGE_PLACEHOLDER, &page.to_string())
    }

    /// Absolute URL of a course page.
    pub fn course_url(&self, link: &str) -> String {
        match Url::parse(&self.origin) {
            Ok(base) => resolve_url(&base, link),
            Err(_) => format!("{}{}", self.origin.trim_end_matches('/'), link),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.listing_url.contains(PAGE_PLACEHOLDER) {
            return Err(AppError::validation(format!(
                "site.listing_url must contain {PAGE_PLACEHOLDER}"
            )));
        }
        Url::parse(&self.page_url(1))?;
        Url::parse(&self.origin)?;
        if self.max_pages == 0 {
            return Err(AppError::validation("site.max_pages must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Extra attempts for a page after a transport error or 5xx response
    #[serde(default = "defaults::retry_attempts")]
    pub retry_attempts: u32,

    /// Backoff unit in milliseconds, multiplied by the attempt number
    #[serde(default = "defaults::retry_backoff")]
    pub retry_backoff_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            retry_attempts: defaults::retry_attempts(),
            retry_backoff_ms: defaults::retry_backoff(),
        }
    }
}

/// Catalog cache policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Time-to-live in seconds; unset keeps the catalog for the process lifetime
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

/// Browser UI server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind
    #[serde(default = "defaults::addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::addr(),
        }
    }
}

mod defaults {
    // Site defaults
    pub fn origin() -> String {
        "https://courses.analyticsvidhya.com".into()
    }
    pub fn listing_url() -> String {
        "https://courses.analyticsvidhya.com/collections?page={page}".into()
    }
    pub fn max_pages() -> u32 {
        8
    }

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; course-search/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn retry_attempts() -> u32 {
        2
    }
    pub fn retry_backoff() -> u64 {
        500
    }

    // Server defaults
    pub fn addr() -> String {
        "127.0.0.1:8501".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_template_without_placeholder() {
        let mut config = Config::default();
        config.site.listing_url = "https://example.com/collections".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_ttl() {
        let mut config = Config::default();
        config.cache.ttl_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_selector() {
        let mut config = Config::default();
        config.selectors.card = "[[invalid".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn page_url_substitutes_index() {
        let site = SiteConfig::default();
        assert_eq!(
            site.page_url(3),
            "https://courses.analyticsvidhya.com/collections?page=3"
        );
    }

    #[test]
    fn course_url_joins_origin() {
        let mut site = SiteConfig::default();
        assert_eq!(
            site.course_url("/courses/intro"),
            "https://courses.analyticsvidhya.com/courses/intro"
        );

        site.origin = "https://example.com/".to_string();
        assert_eq!(site.course_url("/c"), "https://example.com/c");
        assert_eq!(
            site.course_url("https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[site]\nmax_pages = 3\n\n[cache]\nttl_secs = 600\n\n[selectors]\nprice = \"span.price\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.site.max_pages, 3);
        assert_eq!(config.site.origin, defaults::origin());
        assert_eq!(config.cache.ttl(), Some(Duration::from_secs(600)));
        assert_eq!(config.selectors.price, "span.price");
        assert_eq!(config.selectors.title, "h3");
        assert_eq!(config.crawler.retry_attempts, 2);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("definitely/not/here.toml");
        assert_eq!(config.site.max_pages, 8);
        assert!(config.cache.ttl_secs.is_none());
    }
}
