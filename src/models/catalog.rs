// src/models/catalog.rs

//! The aggregated course table and the report of the scrape that built it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Column names of the course table, in row order.
pub const COLUMNS: [&str; 8] = [
    "Title", "Category", "Reviews", "Rating", "Lessons", "Price", "Image", "Link",
];

/// Why the page loop stopped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopReason {
    /// Every page up to the configured maximum was fetched.
    Exhausted,

    /// The site answered a page with a non-200 status.
    EndOfPages { page: u32, status: u16 },

    /// The page could not be fetched even after retrying.
    Unreachable { page: u32, reason: String },
}

impl StopReason {
    /// Whether the stop indicates a failure rather than the end of the listing.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

/// A card that was located but lacked a required field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MalformedCard {
    /// 1-based page index
    pub page: u32,

    /// 0-based position of the card within the page
    pub index: usize,

    /// Name of the missing field
    pub missing: String,
}

/// Summary of a scrape run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapeReport {
    pub pages_fetched: u32,
    pub stop: StopReason,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub malformed: Vec<MalformedCard>,
}

/// All courses collected by one scrape, in page order then document order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub scraped_at: DateTime<Utc>,
    pub report: ScrapeReport,
    pub courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, report: ScrapeReport) -> Self {
        Self {
            scraped_at: Utc::now(),
            report,
            courses,
        }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Render the table as tab-separated values with a header row.
    ///
    /// Tabs and newlines inside cells are replaced by spaces.
    pub fn to_tsv(&self) -> String {
        let mut out = COLUMNS.join("\t");
        out.push('\n');

        for course in &self.courses {
            let rating = course.rating.to_string();
            let cells: [&str; 8] = [
                &course.title,
                &course.category,
                &course.reviews,
                &rating,
                &course.lessons,
                &course.price,
                &course.image,
                &course.link,
            ];
            let line: Vec<String> = cells.iter().map(|c| sanitize_cell(c)).collect();
            out.push_str(&line.join("\t"));
            out.push('\n');
        }
        out
    }
}

fn sanitize_cell(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}
