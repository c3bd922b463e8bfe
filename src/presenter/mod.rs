//! Practice Page Presenter
//!
//! Turns a requested slug into display-ready data, or `NotFound`.
//!
//! - `view_models`: metadata, related links, page view models
//! - `structured_data`: schema.org LegalService / FAQPage payloads
//! - `view_builder`: PracticePresenter (resolve + home page)

pub mod view_models;
pub mod structured_data;
pub mod view_builder;

pub use view_builder::PracticePresenter;
pub use view_models::{
    HomeViewModel, NOT_FOUND_TITLE, OpenGraph, PageMetadata, PracticeSummary, PracticeViewModel,
    RelatedLink, RelatedLinks, Resolution,
};
pub use structured_data::{FaqPageSchema, LegalServiceSchema, StructuredData};
