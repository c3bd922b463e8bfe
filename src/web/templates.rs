// Page templates rendered with Askama
//
// Shared by the API server (feature "api") and the static page generator.

use askama::Template;

use crate::error::RenderError;
use crate::presenter::{HomeViewModel, NOT_FOUND_TITLE, PracticePresenter, PracticeViewModel};

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub canonical_url: String,
    pub firm_name: &'a str,
    pub home: &'a HomeViewModel,
}

// ============================================================================
// Practice Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/practice.html")]
pub struct PracticeTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub canonical_url: String,
    pub firm_name: &'a str,
    pub view: &'a PracticeViewModel,
    /// Already escaped for embedding in a script element
    pub json_ld: String,
}

// ============================================================================
// Not Found Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub canonical_url: String,
    pub firm_name: &'a str,
}

pub fn render_home(presenter: &PracticePresenter) -> Result<String, RenderError> {
    let home = presenter.home();
    let template = HomeTemplate {
        page_title: presenter.firm_name(),
        description: "Advocates & Legal Consultants. Supreme Court of India | High Courts | Tribunals",
        canonical_url: presenter.absolute_url("/"),
        firm_name: presenter.firm_name(),
        home: &home,
    };
    Ok(template.render()?)
}

pub fn render_practice(
    presenter: &PracticePresenter,
    view: &PracticeViewModel,
) -> Result<String, RenderError> {
    let template = PracticeTemplate {
        page_title: &view.metadata.title,
        description: &view.metadata.description,
        canonical_url: presenter.absolute_url(&view.metadata.canonical_path),
        firm_name: presenter.firm_name(),
        view,
        json_ld: view.structured_data.to_json_ld()?,
    };
    Ok(template.render()?)
}

pub fn render_not_found(presenter: &PracticePresenter) -> Result<String, RenderError> {
    let template = NotFoundTemplate {
        page_title: NOT_FOUND_TITLE,
        description: "",
        canonical_url: String::new(),
        firm_name: presenter.firm_name(),
    };
    Ok(template.render()?)
}
