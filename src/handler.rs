// src/handler.rs

//! Search request handler.
//!
//! One call per user action: the catalog is passed in, the category filter
//! and the optional query are applied, and a view model comes back. Nothing
//! here touches the network or the cache.

use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Course, SiteConfig, StopReason};
use crate::services::{CategoryFilter, filter_by_category, filter_courses, suggest};

/// Shown when a query is given and nothing matches.
pub const NO_MATCHES: &str = "No courses found matching your search query.";

/// Shown when no query is given.
pub const SHOWING_ALL: &str = "Showing all courses.";

/// User input for one search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub category: CategoryFilter,

    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// The query exactly as typed, if it is not empty.
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// A course ready for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseCard {
    pub title: String,
    pub category: String,
    pub reviews: String,
    pub rating: u8,
    pub stars: String,
    pub lessons: String,
    pub price: String,
    pub image: String,
    pub url: String,
}

impl CourseCard {
    fn new(course: &Course, site: &SiteConfig) -> Self {
        Self {
            title: course.title.clone(),
            category: course.category.clone(),
            reviews: course.reviews.clone(),
            rating: course.rating,
            stars: course.stars(),
            lessons: course.lessons.clone(),
            price: course.price.clone(),
            image: course.image.clone(),
            url: site.course_url(&course.link),
        }
    }
}

/// Everything the page shows for one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub category: CategoryFilter,
    pub query: Option<String>,
    pub suggestions: Vec<String>,
    pub message: &'static str,
    /// Set when the last scrape stopped on a failure
    pub warning: Option<String>,
    pub courses: Vec<CourseCard>,
}

/// Filter the catalog for one request.
///
/// Suggestions are drawn from the category-filtered courses before the title
/// filter narrows them.
pub fn handle_search(catalog: &Catalog, query: &SearchQuery, site: &SiteConfig) -> SearchPage {
    let text = query.text();
    let shown = filter_courses(&catalog.courses, query.category, text);

    let (suggestions, message) = match text {
        Some(text) => {
            let titles = filter_by_category(&catalog.courses, query.category)
                .into_iter()
                .map(|c| c.title.as_str());
            let message = if shown.is_empty() { NO_MATCHES } else { "" };
            (suggest(text, titles), message)
        }
        None => (Vec::new(), SHOWING_ALL),
    };

    SearchPage {
        category: query.category,
        query: text.map(str::to_string),
        suggestions,
        message,
        warning: scrape_warning(&catalog.report.stop),
        courses: shown.into_iter().map(|c| CourseCard::new(c, site)).collect(),
    }
}

fn scrape_warning(stop: &StopReason) -> Option<String> {
    match stop {
        StopReason::Unreachable { page, reason } => Some(format!(
            "The course listing could not be reached at page {page} ({reason}); results may be incomplete."
        )),
        _ => None,
    }
}
