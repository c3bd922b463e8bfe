//! Practice Registry - immutable slug-keyed catalog
//!
//! Records are stored in catalog order in a `Vec` with an FxHashMap index from
//! slug to position, so iteration is deterministic and lookups are O(1).
//! There is no write path after construction.

use rustc_hash::FxHashMap;

use crate::catalog::data;
use crate::catalog::types::PracticeArea;
use crate::catalog::validation;
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct PracticeRegistry {
    areas: Vec<PracticeArea>,
    index: FxHashMap<String, usize>,
}

impl PracticeRegistry {
    /// Build a registry from entries in the given order.
    ///
    /// The index key is always the record's own `slug`, so a key can never
    /// disagree with its record. Duplicate slugs are rejected.
    pub fn from_entries(entries: Vec<PracticeArea>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        index.reserve(entries.len());

        for (pos, area) in entries.iter().enumerate() {
            if index.insert(area.slug.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateSlug(area.slug.clone()));
            }
        }

        Ok(Self { areas: entries, index })
    }

    /// The firm's built-in catalog, checked by the validation pass.
    pub fn builtin() -> Result<Self, CatalogError> {
        let registry = Self::from_entries(data::practice_areas())?;
        validation::validate(&registry).map_err(CatalogError::Validation)?;
        tracing::info!("Loaded {} practice areas", registry.len());
        Ok(registry)
    }

    /// Every record in catalog order.
    pub fn get_all(&self) -> &[PracticeArea] {
        &self.areas
    }

    /// Exact, case-sensitive lookup. Unknown or empty slugs are `None`.
    pub fn get_by_slug(&self, slug: &str) -> Option<&PracticeArea> {
        self.index.get(slug).map(|&pos| &self.areas[pos])
    }

    /// Every valid slug in catalog order (for static page generation).
    pub fn get_all_slugs(&self) -> Vec<&str> {
        self.areas.iter().map(|a| a.slug.as_str()).collect()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
