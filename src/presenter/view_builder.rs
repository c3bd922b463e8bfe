//! View Builder
//!
//! Resolves a requested slug into a PracticeViewModel. Resolution is pure and
//! total: every input yields either `Found` or `NotFound`, and repeated calls
//! with the same slug give equal results.

use std::sync::Arc;

use crate::catalog::{PracticeArea, PracticeRegistry, practice_href};
use crate::config::SiteConfig;
use crate::presenter::structured_data::StructuredData;
use crate::presenter::view_models::{
    HomeViewModel, OpenGraph, PageMetadata, PracticeSummary, PracticeViewModel, RelatedLink,
    RelatedLinks, Resolution,
};

#[derive(Debug, Clone)]
pub struct PracticePresenter {
    registry: Arc<PracticeRegistry>,
    firm_name: String,
    base_url: String,
}

impl PracticePresenter {
    pub fn new(registry: Arc<PracticeRegistry>, config: &SiteConfig) -> Self {
        Self {
            registry,
            firm_name: config.firm_name.clone(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn registry(&self) -> &PracticeRegistry {
        &self.registry
    }

    pub fn firm_name(&self) -> &str {
        &self.firm_name
    }

    /// Absolute URL for a site path such as `/practice/civil-law`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn resolve(&self, slug: &str) -> Resolution {
        let Some(area) = self.registry.get_by_slug(slug) else {
            tracing::debug!("No practice area for slug {:?}", slug);
            return Resolution::NotFound;
        };

        let page_url = self.absolute_url(&area.href());

        Resolution::Found(PracticeViewModel {
            practice: area.clone(),
            metadata: self.metadata(area),
            structured_data: StructuredData::for_practice(area, page_url),
            related: self.related_links(area),
        })
    }

    /// Home page grid: every practice area in catalog order.
    pub fn home(&self) -> HomeViewModel {
        HomeViewModel {
            firm_name: self.firm_name.clone(),
            areas: self
                .registry
                .get_all()
                .iter()
                .map(PracticeSummary::from)
                .collect(),
        }
    }

    fn metadata(&self, area: &PracticeArea) -> PageMetadata {
        PageMetadata {
            title: format!("{} | {}", area.title, self.firm_name),
            description: area.short_description.clone(),
            canonical: area.slug.clone(),
            canonical_path: area.href(),
            open_graph: OpenGraph {
                title: area.title.clone(),
                description: area.full_description.clone(),
                og_type: "article",
            },
        }
    }

    /// Related slugs missing from the registry are dropped; the validation
    /// pass is where they get reported.
    fn related_links(&self, area: &PracticeArea) -> RelatedLinks {
        area.related_practices
            .iter()
            .filter_map(|slug| match self.registry.get_by_slug(slug) {
                Some(related) => Some(RelatedLink {
                    slug: related.slug.clone(),
                    title: related.title.clone(),
                    href: practice_href(&related.slug),
                }),
                None => {
                    tracing::debug!("Skipping dangling related practice {:?} on {:?}", slug, area.slug);
                    None
                }
            })
            .collect()
    }
}
