//! Catalog Integration Tests
//!
//! Resolution properties checked against the built-in catalog, plus a small
//! hand-built registry for dangling related references.

use practice_catalog::catalog::validate;
use practice_catalog::{
    Faq, PracticeArea, PracticePresenter, PracticeRegistry, Resolution, SiteConfig,
};
use std::sync::Arc;

fn builtin_presenter() -> PracticePresenter {
    let registry = Arc::new(PracticeRegistry::builtin().expect("built-in catalog is valid"));
    PracticePresenter::new(registry, &SiteConfig::default())
}

#[test]
fn test_every_slug_resolves() {
    let presenter = builtin_presenter();
    for slug in presenter.registry().get_all_slugs() {
        assert!(presenter.resolve(slug).is_found(), "{} should resolve", slug);
    }
}

#[test]
fn test_unknown_slugs_not_found() {
    let presenter = builtin_presenter();
    for slug in ["nonexistent-area", "", " ", "Criminal-Law", "criminal-law/", "criminal", "tax-law"] {
        assert_eq!(presenter.resolve(slug), Resolution::NotFound, "{:?}", slug);
    }
}

#[test]
fn test_self_consistent_keying() {
    let registry = PracticeRegistry::builtin().unwrap();
    for area in registry.get_all() {
        assert_eq!(registry.get_by_slug(&area.slug), Some(area));
    }
}

#[test]
fn test_faq_payload_preserves_order() {
    let presenter = builtin_presenter();
    for area in presenter.registry().get_all() {
        let view = presenter.resolve(&area.slug).found().unwrap();
        let entities = &view.structured_data.faq_page.main_entity;

        assert_eq!(entities.len(), area.faqs.len());
        for (entity, faq) in entities.iter().zip(&area.faqs) {
            assert_eq!(entity.name, faq.question);
            assert_eq!(entity.accepted_answer.text, faq.answer);
        }

        let questions: Vec<&str> = area.faqs.iter().map(|f| f.question.as_str()).collect();
        assert_eq!(view.structured_data.service.knows_about, questions);
    }
}

#[test]
fn test_related_links_filter_dangling() {
    let entries = vec![
        PracticeArea {
            slug: "civil-law".to_string(),
            title: "Civil Litigation".to_string(),
            short_description: "Civil".to_string(),
            full_description: "Civil suits".to_string(),
            faqs: vec![Faq::new("Limitation?", "Three years.")],
            related_practices: vec!["family-law".to_string(), "maritime-law".to_string()],
        },
        PracticeArea {
            slug: "family-law".to_string(),
            title: "Family Law".to_string(),
            short_description: "Family".to_string(),
            full_description: "Matrimonial disputes".to_string(),
            faqs: vec![],
            related_practices: vec![],
        },
    ];
    let registry = Arc::new(PracticeRegistry::from_entries(entries).unwrap());
    assert!(validate(&registry).is_err());

    let presenter = PracticePresenter::new(registry, &SiteConfig::default());
    let view = presenter.resolve("civil-law").found().unwrap();

    let related: Vec<&str> = view.related.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(related, vec!["family-law"]);
}

#[test]
fn test_resolve_is_idempotent() {
    let presenter = builtin_presenter();
    for slug in presenter.registry().get_all_slugs() {
        assert_eq!(presenter.resolve(slug), presenter.resolve(slug));
    }
    assert_eq!(presenter.resolve("nonexistent-area"), presenter.resolve("nonexistent-area"));
}

#[test]
fn test_criminal_law_scenario() {
    let presenter = builtin_presenter();
    let view = presenter.resolve("criminal-law").found().unwrap();

    assert_eq!(view.practice.title, "Criminal Defense & Trial Advocacy");
    assert_eq!(view.practice.faqs.len(), 2);
    assert_eq!(view.structured_data.faq_page.main_entity.len(), 2);
    assert_eq!(
        view.metadata.title,
        "Criminal Defense & Trial Advocacy | KVNR Law Associates"
    );
    assert_eq!(
        view.metadata.description,
        "Representation in Sessions Courts, High Courts, and Supreme Court for criminal matters."
    );
    assert_eq!(view.metadata.canonical, "criminal-law");

    let related: Vec<&str> = view.related.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(related, vec!["civil-law", "family-law"]);
    assert_eq!(view.related[0].title, "Civil Litigation & Dispute Resolution");
    assert_eq!(view.related[1].title, "Family & Matrimonial Law");
}

#[test]
fn test_nonexistent_area_scenario() {
    assert_eq!(builtin_presenter().resolve("nonexistent-area"), Resolution::NotFound);
}

#[test]
fn test_home_lists_catalog_in_order() {
    let presenter = builtin_presenter();
    let home = presenter.home();

    let slugs: Vec<&str> = home.areas.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, presenter.registry().get_all_slugs());
    assert_eq!(home.areas[4].href, "/practice/corporate-law");
    assert_eq!(home.firm_name, "KVNR Law Associates");
}

#[test]
fn test_view_model_json_shape() {
    let presenter = builtin_presenter();
    let view = presenter.resolve("family-law").found().unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["practice"]["slug"], "family-law");
    assert_eq!(json["practice"]["shortDescription"], "Divorce, custody, maintenance, and succession matters.");
    assert_eq!(json["metadata"]["canonicalPath"], "/practice/family-law");
    assert_eq!(json["metadata"]["openGraph"]["type"], "article");
    assert_eq!(json["structuredData"]["service"]["@type"], "LegalService");
    assert_eq!(json["structuredData"]["faqPage"]["@type"], "FAQPage");
    assert_eq!(json["related"].as_array().unwrap().len(), 2);
}
