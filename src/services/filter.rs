//! Category and title filtering over the course catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Course;

/// Price-based course category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl CategoryFilter {
    /// Every option, in display order.
    pub const OPTIONS: [CategoryFilter; 3] = [Self::All, Self::Free, Self::Paid];

    /// Label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Courses",
            Self::Free => "Free Courses",
            Self::Paid => "Paid Courses",
        }
    }

    /// Query parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Paid => "paid",
        }
    }

    pub fn matches(self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Free => course.is_free(),
            Self::Paid => !course.is_free(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all courses" => Ok(Self::All),
            "free" | "free courses" => Ok(Self::Free),
            "paid" | "paid courses" => Ok(Self::Paid),
            other => Err(AppError::validation(format!(
                "unknown category '{other}' (expected all, free or paid)"
            ))),
        }
    }
}

/// Courses in `category`, order preserved.
pub fn filter_by_category(courses: &[Course], category: CategoryFilter) -> Vec<&Course> {
    courses.iter().filter(|c| category.matches(c)).collect()
}

/// Courses whose title contains `query`, ignoring case. An empty query keeps everything.
pub fn filter_by_title<'a>(courses: &[&'a Course], query: &str) -> Vec<&'a Course> {
    if query.is_empty() {
        return courses.to_vec();
    }
    let needle = query.to_lowercase();
    courses
        .iter()
        .copied()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .collect()
}

/// Apply the category filter, then the optional title filter.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    category: CategoryFilter,
    query: Option<&str>,
) -> Vec<&'a Course> {
    let by_category = filter_by_category(courses, category);
    match query {
        Some(q) => filter_by_title(&by_category, q),
        None => by_category,
    }
}
