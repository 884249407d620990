// src/models/selectors.rs

//! CSS selectors for scraping course cards.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CSS selectors for scraping a course listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseSelectors {
    /// Selector for each course card
    pub card: String,

    /// Selector for the title element within a card
    pub title: String,

    /// Selector for the category element within a card
    pub category: String,

    /// Selector for the review count within a card
    pub reviews: String,

    /// Selector matching each filled star within a card
    pub star: String,

    /// Selector for the lesson count within a card
    pub lessons: String,

    /// Selector for the price within a card
    pub price: String,

    /// Selector for the thumbnail image within a card
    pub image: String,

    /// Attribute holding the thumbnail URL (usually "src")
    pub image_attr: String,

    /// Attribute on the card holding the course link (usually "href")
    pub link_attr: String,
}

impl Default for CourseSelectors {
    fn default() -> Self {
        Self {
            card: "a.course-card.course-card__public.published".to_string(),
            title: "h3".to_string(),
            category: "h4".to_string(),
            reviews: "span.review__stars-count".to_string(),
            star: "i.fa-star".to_string(),
            lessons: "span.course-card__lesson-count".to_string(),
            price: "span.course-card__price".to_string(),
            image: "img.course-card__img".to_string(),
            image_attr: "src".to_string(),
            link_attr: "href".to_string(),
        }
    }
}

impl CourseSelectors {
    /// Parse every selector, failing on the first invalid one.
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            card: parse_selector(&self.card)?,
            title: parse_selector(&self.title)?,
            category: parse_selector(&self.category)?,
            reviews: parse_selector(&self.reviews)?,
            star: parse_selector(&self.star)?,
            lessons: parse_selector(&self.lessons)?,
            price: parse_selector(&self.price)?,
            image: parse_selector(&self.image)?,
            image_attr: self.image_attr.clone(),
            link_attr: self.link_attr.clone(),
        })
    }
}

/// Parsed form of [`CourseSelectors`].
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub card: Selector,
    pub title: Selector,
    pub category: Selector,
    pub reviews: Selector,
    pub star: Selector,
    pub lessons: Selector,
    pub price: Selector,
    pub image: Selector,
    pub image_attr: String,
    pub link_attr: String,
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
