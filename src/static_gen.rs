//! Static Page Generation
//!
//! Pre-builds one HTML page per registered slug, plus the home page and a
//! 404 page. Practice pages render in parallel with Rayon; the registry is
//! read-only so no coordination is needed.
//!
//! Output layout:
//! - `index.html`
//! - `404.html`
//! - `practice/{slug}/index.html`

use rayon::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::catalog::is_valid_slug;
use crate::error::RenderError;
use crate::presenter::{PracticePresenter, Resolution};
use crate::web::templates::{render_home, render_not_found, render_practice};

/// One rendered page and its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub path: PathBuf,
    pub html: String,
}

/// Render every page of the site in memory.
///
/// Fails with `RenderError::InvalidSlug` before rendering anything if a slug
/// is not lowercase kebab-case.
pub fn generate_pages(presenter: &PracticePresenter) -> Result<Vec<GeneratedPage>, RenderError> {
    let slugs = presenter.registry().get_all_slugs();
    if let Some(bad) = slugs.iter().find(|slug| !is_valid_slug(slug)) {
        return Err(RenderError::InvalidSlug(bad.to_string()));
    }

    let practice_pages: Vec<GeneratedPage> = slugs
        .par_iter()
        .filter_map(|slug| match presenter.resolve(slug) {
            Resolution::Found(view) => Some(render_practice(presenter, &view).map(|html| {
                GeneratedPage {
                    path: practice_page_path(slug),
                    html,
                }
            })),
            // Registry slugs always resolve
            Resolution::NotFound => {
                tracing::warn!("Slug {} did not resolve during generation", slug);
                None
            }
        })
        .collect::<Result<_, _>>()?;

    let mut pages = Vec::with_capacity(practice_pages.len() + 2);
    pages.push(GeneratedPage {
        path: PathBuf::from("index.html"),
        html: render_home(presenter)?,
    });
    pages.push(GeneratedPage {
        path: PathBuf::from("404.html"),
        html: render_not_found(presenter)?,
    });
    pages.extend(practice_pages);

    Ok(pages)
}

/// Write generated pages under `out_dir`, creating directories as needed.
///
/// Every page path must be relative and free of `..`; nothing is written
/// unless all of them are.
pub fn write_pages(out_dir: &Path, pages: &[GeneratedPage]) -> Result<(), RenderError> {
    if let Some(page) = pages.iter().find(|p| !is_contained(&p.path)) {
        return Err(RenderError::UnsafePath(page.path.clone()));
    }

    for page in pages {
        let target = out_dir.join(&page.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &page.html)?;
        tracing::debug!("Wrote {}", target.display());
    }
    Ok(())
}

fn practice_page_path(slug: &str) -> PathBuf {
    Path::new("practice").join(slug).join("index.html")
}

fn is_contained(path: &Path) -> bool {
    path.components().count() > 0
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}
