//! Catalog Validation
//!
//! Offline integrity pass over a registry. Resolution tolerates dangling
//! related references by dropping them; this pass is where they get reported.
//!
//! Checks:
//! - slugs are lowercase kebab-case
//! - titles are non-empty
//! - every FAQ has a non-empty question and answer
//! - every related practice slug exists in the registry

use crate::catalog::registry::PracticeRegistry;
use crate::error::CatalogError;

/// Run every check and collect all issues rather than stopping at the first.
pub fn validate(registry: &PracticeRegistry) -> Result<(), Vec<CatalogError>> {
    let mut issues = Vec::new();

    for area in registry.get_all() {
        if !is_valid_slug(&area.slug) {
            issues.push(CatalogError::InvalidSlug(area.slug.clone()));
        }

        if area.title.trim().is_empty() {
            issues.push(CatalogError::EmptyTitle(area.slug.clone()));
        }

        for (index, faq) in area.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() {
                issues.push(CatalogError::EmptyFaqField {
                    slug: area.slug.clone(),
                    index,
                    field: "question",
                });
            }
            if faq.answer.trim().is_empty() {
                issues.push(CatalogError::EmptyFaqField {
                    slug: area.slug.clone(),
                    index,
                    field: "answer",
                });
            }
        }

        for target in &area.related_practices {
            if !registry.contains(target) {
                issues.push(CatalogError::DanglingReference {
                    slug: area.slug.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        for issue in &issues {
            tracing::warn!("Catalog issue: {}", issue);
        }
        Err(issues)
    }
}

/// Lowercase ASCII letters and digits separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Faq, PracticeArea};

    fn entry(slug: &str, related: &[&str], faqs: Vec<Faq>) -> PracticeArea {
        PracticeArea {
            slug: slug.to_string(),
            title: "Title".to_string(),
            short_description: "short".to_string(),
            full_description: "full".to_string(),
            faqs,
            related_practices: related.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let registry =
            PracticeRegistry::from_entries(crate::catalog::data::practice_areas()).unwrap();
        assert_eq!(validate(&registry), Ok(()));
    }

    #[test]
    fn test_dangling_reference_reported() {
        let registry = PracticeRegistry::from_entries(vec![
            entry("civil-law", &["tax-law", "family-law"], vec![]),
            entry("family-law", &["civil-law"], vec![]),
        ])
        .unwrap();

        let issues = validate(&registry).unwrap_err();
        assert_eq!(
            issues,
            vec![CatalogError::DanglingReference {
                slug: "civil-law".to_string(),
                target: "tax-law".to_string(),
            }]
        );
    }

    #[test]
    fn test_collects_all_issues() {
        let mut bad = entry("Bad_Slug", &["missing"], vec![Faq::new("", "answer"), Faq::new("q", " ")]);
        bad.title = String::new();
        let registry = PracticeRegistry::from_entries(vec![bad]).unwrap();

        let issues = validate(&registry).unwrap_err();
        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&CatalogError::InvalidSlug("Bad_Slug".to_string())));
        assert!(issues.contains(&CatalogError::EmptyTitle("Bad_Slug".to_string())));
        assert!(issues.contains(&CatalogError::EmptyFaqField {
            slug: "Bad_Slug".to_string(),
            index: 0,
            field: "question",
        }));
        assert!(issues.contains(&CatalogError::EmptyFaqField {
            slug: "Bad_Slug".to_string(),
            index: 1,
            field: "answer",
        }));
    }

    #[test]
    fn test_empty_faqs_are_allowed() {
        let registry = PracticeRegistry::from_entries(vec![entry("tax-law", &[], vec![])]).unwrap();
        assert!(validate(&registry).is_ok());
    }

    #[test]
    fn test_slug_format() {
        assert!(is_valid_slug("criminal-law"));
        assert!(is_valid_slug("gst2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-law"));
        assert!(!is_valid_slug("law-"));
        assert!(!is_valid_slug("civil--law"));
        assert!(!is_valid_slug("Civil-Law"));
        assert!(!is_valid_slug("civil law"));
        assert!(!is_valid_slug("civil/law"));
    }
}
