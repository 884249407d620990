// src/services/extractor.rs

//! Course card extraction.
//!
//! Turns a listing page into course records. Optional fields fall back to
//! placeholder text; a card missing a required field is reported and skipped.

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{
    CompiledSelectors, Course, CourseSelectors, MAX_RATING, MalformedCard, NO_LESSONS, NO_REVIEWS,
    UNKNOWN_PRICE,
};

/// Courses and rejected cards found on one page.
#[derive(Debug, Default)]
pub struct PageExtraction {
    pub courses: Vec<Course>,
    pub malformed: Vec<MalformedCard>,
}

/// Extracts course records from listing markup.
pub struct CourseExtractor {
    selectors: CompiledSelectors,
}

impl CourseExtractor {
    /// Create an extractor, failing if any selector is invalid.
    pub fn new(selectors: &CourseSelectors) -> Result<Self> {
        Ok(Self {
            selectors: selectors.compile()?,
        })
    }

    /// Parse page markup and extract every card on it.
    pub fn extract(&self, html: &str, page: u32) -> PageExtraction {
        let document = Html::parse_document(html);
        self.extract_document(&document, page)
    }

    /// Extract every card from an already parsed document, in document order.
    fn extract_document(&self, document: &Html, page: u32) -> PageExtraction {
        let mut extraction = PageExtraction::default();

        for (index, card) in document.select(&self.selectors.card).enumerate() {
            match self.extract_card(card) {
                Ok(course) => extraction.courses.push(course),
                Err(missing) => {
                    log::warn!(
                        "Skipping card {} on page {}: missing {}",
                        index,
                        page,
                        missing
                    );
                    extraction.malformed.push(MalformedCard {
                        page,
                        index,
                        missing: missing.to_string(),
                    });
                }
            }
        }

        extraction
    }

    /// Extract one card. The error names the first missing required field.
    fn extract_card(&self, card: ElementRef<'_>) -> std::result::Result<Course, &'static str> {
        let sel = &self.selectors;

        let title = first_text(card, &sel.title).ok_or("title")?;
        let category = first_text(card, &sel.category).ok_or("category")?;
        let image = card
            .select(&sel.image)
            .next()
            .and_then(|img| img.value().attr(&sel.image_attr))
            .ok_or("image")?
            .to_string();
        let link = card
            .value()
            .attr(&sel.link_attr)
            .ok_or("link")?
            .to_string();

        let reviews = first_text(card, &sel.reviews).unwrap_or_else(|| NO_REVIEWS.to_string());
        let lessons = first_text(card, &sel.lessons).unwrap_or_else(|| NO_LESSONS.to_string());
        let price = first_text(card, &sel.price).unwrap_or_else(|| UNKNOWN_PRICE.to_string());

        let stars = card.select(&sel.star).count();
        let rating = stars.min(MAX_RATING as usize) as u8;

        Ok(Course {
            title,
            category,
            reviews,
            rating,
            lessons,
            price,
            image,
            link,
        })
    }
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
