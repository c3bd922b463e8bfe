//! HTML rendering layer
//!
//! - `templates`: Askama page templates and render helpers
//! - `handlers`: Axum page handlers (feature "api")

pub mod templates;

#[cfg(feature = "api")]
pub mod handlers;

pub use templates::{render_home, render_not_found, render_practice};
