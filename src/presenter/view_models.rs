//! View Models for Practice Pages
//!
//! Display-ready data handed to the HTML templates and the JSON API.

use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::PracticeArea;
use crate::presenter::structured_data::StructuredData;

pub const NOT_FOUND_TITLE: &str = "Practice Area Not Found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: &'static str,
}

/// `<head>` metadata for a practice page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// "{title} | {firm name}"
    pub title: String,
    pub description: String,
    /// The slug itself
    pub canonical: String,
    pub canonical_path: String,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub slug: String,
    pub title: String,
    pub href: String,
}

/// Related practices rarely exceed a handful.
pub type RelatedLinks = SmallVec<[RelatedLink; 4]>;

/// Everything needed to render one practice page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeViewModel {
    pub practice: PracticeArea,
    pub metadata: PageMetadata,
    pub structured_data: StructuredData,
    /// Only related slugs that exist in the registry, in source order
    pub related: RelatedLinks,
}

/// Outcome of resolving a slug. `NotFound` is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PracticeViewModel),
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn found(self) -> Option<PracticeViewModel> {
        match self {
            Resolution::Found(view) => Some(view),
            Resolution::NotFound => None,
        }
    }
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSummary {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub href: String,
}

impl From<&PracticeArea> for PracticeSummary {
    fn from(area: &PracticeArea) -> Self {
        Self {
            slug: area.slug.clone(),
            title: area.title.clone(),
            short_description: area.short_description.clone(),
            href: area.href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeViewModel {
    pub firm_name: String,
    pub areas: Vec<PracticeSummary>,
}
