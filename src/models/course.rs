//! Course record data structure.

use serde::{Deserialize, Serialize};

/// Placeholder for a card without a review count.
pub const NO_REVIEWS: &str = "No reviews";

/// Placeholder for a card without a lesson count.
pub const NO_LESSONS: &str = "No lessons";

/// Placeholder for a card without a price.
pub const UNKNOWN_PRICE: &str = "Unknown price";

/// Price text that marks a course as free.
pub const FREE_PRICE: &str = "Free";

/// Highest number of filled stars a course can show.
pub const MAX_RATING: u8 = 5;

/// A course scraped from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Course {
    /// Course title
    pub title: String,

    /// Category heading shown on the card
    pub category: String,

    /// Review count text, or [`NO_REVIEWS`]
    pub reviews: String,

    /// Number of filled stars, 0..=5
    pub rating: u8,

    /// Lesson count text, or [`NO_LESSONS`]
    pub lessons: String,

    /// Price text, or [`UNKNOWN_PRICE`]
    pub price: String,

    /// Thumbnail URL
    pub image: String,

    /// Path of the course page, relative to the site origin
    pub link: String,
}

impl Course {
    /// Whether the price is exactly [`FREE_PRICE`].
    pub fn is_free(&self) -> bool {
        self.price == FREE_PRICE
    }

    /// Star rendering of the rating, e.g. `★★★☆☆`.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course {
            title: "Python for Beginners".to_string(),
            category: "Programming".to_string(),
            reviews: "12 reviews".to_string(),
            rating: 3,
            lessons: "20 Lessons".to_string(),
            price: FREE_PRICE.to_string(),
            image: "https://cdn.example.com/python.png".to_string(),
            link: "/courses/python-for-beginners".to_string(),
        }
    }

    #[test]
    fn test_stars() {
        let mut course = sample_course();
        assert_eq!(course.stars(), "★★★☆☆");

        course.rating = 0;
        assert_eq!(course.stars(), "☆☆☆☆☆");
    }

    #[test]
    fn test_is_free_is_exact() {
        let mut course = sample_course();
        assert!(course.is_free());

        course.price = "free".to_string();
        assert!(!course.is_free());

        course.price = UNKNOWN_PRICE.to_string();
        assert!(!course.is_free());
    }

    #[test]
    fn test_serializes_with_column_names() {
        let json = serde_json::to_value(sample_course()).unwrap();
        assert_eq!(json["Title"], "Python for Beginners");
        assert_eq!(json["Rating"], 3);
        assert_eq!(json["Link"], "/courses/python-for-beginners");
    }
}
