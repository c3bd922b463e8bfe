//! Practice Catalog
//!
//! Content model and page resolution for a law firm's practice area pages.
//!
//! - `catalog/`: PracticeArea records, the immutable slug registry, validation
//! - `presenter/`: slug -> view model (metadata, JSON-LD, related links) or NotFound
//! - `web/`: Askama templates (and Axum page handlers with the `api` feature)
//! - `static_gen`: parallel pre-rendering of every page
//! - `api_server`: Axum router and JSON endpoints (feature `api`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod presenter;
pub mod static_gen;
pub mod web;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{Faq, PracticeArea, PracticeRegistry};
pub use config::SiteConfig;
pub use error::{CatalogError, RenderError};
pub use presenter::{PracticePresenter, PracticeViewModel, Resolution};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
