//! Core content types for the practice area catalog.

use serde::Serialize;

/// A single question/answer pair shown on a practice page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One legal service category and its page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeArea {
    /// URL-safe key, also the `/practice/{slug}` path segment
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    /// Display order is preserved
    pub faqs: Vec<Faq>,
    /// Slugs of other entries; may dangle
    pub related_practices: Vec<String>,
}

impl PracticeArea {
    /// Path of this entry's page on the site.
    pub fn href(&self) -> String {
        practice_href(&self.slug)
    }
}

pub fn practice_href(slug: &str) -> String {
    format!("/practice/{}", slug)
}
