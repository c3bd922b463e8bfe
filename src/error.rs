//! Error types for catalog construction and page rendering.
//!
//! Slug lookups never fail: an unknown slug is `None` / `Resolution::NotFound`.
//! These errors cover the build-time paths only.

use std::path::PathBuf;
use thiserror::Error;

/// Data-integrity problems in a practice area catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate slug '{0}'")]
    DuplicateSlug(String),

    #[error("slug '{0}' must be lowercase kebab-case")]
    InvalidSlug(String),

    #[error("practice area '{0}' has an empty title")]
    EmptyTitle(String),

    #[error("practice area '{slug}' has an empty {field} in FAQ #{index}")]
    EmptyFaqField {
        slug: String,
        index: usize,
        field: &'static str,
    },

    #[error("practice area '{slug}' references unknown related practice '{target}'")]
    DanglingReference { slug: String, target: String },

    #[error("catalog failed validation with {} issue(s): {}", .0.len(), join_issues(.0))]
    Validation(Vec<CatalogError>),
}

fn join_issues(issues: &[CatalogError]) -> String {
    issues
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failures while turning a view model into HTML or writing it out.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("refusing to generate a page for invalid slug '{0}'")]
    InvalidSlug(String),

    #[error("page path {} escapes the output directory", .0.display())]
    UnsafePath(PathBuf),
}
