//! Structured Data (schema.org JSON-LD)
//!
//! Two entities per practice page:
//! - `LegalService`: the practice area as a service, with its FAQ questions as `knowsAbout`
//! - `FAQPage`: each question paired with its answer, in display order
//!
//! Both are pure derivations of the PracticeArea record.

use serde::Serialize;

use crate::catalog::PracticeArea;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalServiceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub knows_about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub main_entity: Vec<FaqQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqQuestion {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub accepted_answer: FaqAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqAnswer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

/// Both payloads for one practice page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    pub service: LegalServiceSchema,
    pub faq_page: FaqPageSchema,
}

impl StructuredData {
    pub fn for_practice(area: &PracticeArea, page_url: String) -> Self {
        Self {
            service: legal_service(area, page_url),
            faq_page: faq_page(area),
        }
    }

    /// Script body for `<script type="application/ld+json">`: `[service, faqPage]`.
    ///
    /// Every `<` is written as the JSON escape `\u003c`, so neither `</script>`
    /// nor `<!--` can appear in the script body. The value parses unchanged.
    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(&(&self.service, &self.faq_page))?;
        Ok(json.replace('<', "\\u003c"))
    }
}

pub fn legal_service(area: &PracticeArea, page_url: String) -> LegalServiceSchema {
    LegalServiceSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "LegalService",
        name: area.title.clone(),
        description: area.full_description.clone(),
        url: page_url,
        knows_about: area.faqs.iter().map(|f| f.question.clone()).collect(),
    }
}

pub fn faq_page(area: &PracticeArea) -> FaqPageSchema {
    FaqPageSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: area
            .faqs
            .iter()
            .map(|f| FaqQuestion {
                schema_type: "Question",
                name: f.question.clone(),
                accepted_answer: FaqAnswer {
                    schema_type: "Answer",
                    text: f.answer.clone(),
                },
            })
            .collect(),
    }
}
