//! Practice Area Catalog
//!
//! The content model for the firm's practice area pages:
//! - `types`: PracticeArea and Faq records
//! - `data`: the built-in catalog entries
//! - `registry`: immutable slug-keyed lookup
//! - `validation`: offline integrity checks (dangling related slugs etc.)

pub mod types;
pub mod data;
pub mod registry;
pub mod validation;

pub use types::{Faq, PracticeArea, practice_href};
pub use registry::PracticeRegistry;
pub use validation::{validate, is_valid_slug};
