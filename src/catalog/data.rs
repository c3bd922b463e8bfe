//! Built-in Practice Area Catalog
//!
//! The firm's fixed set of practice areas. Entry order here is the order used
//! by the home page grid and by static page generation.

use crate::catalog::types::{Faq, PracticeArea};

/// All built-in practice areas, in catalog order.
pub fn practice_areas() -> Vec<PracticeArea> {
    vec![
        area(
            "criminal-law",
            "Criminal Defense & Trial Advocacy",
            "Representation in Sessions Courts, High Courts, and Supreme Court for criminal matters.",
            "Comprehensive defense strategy for IPC and BNS offences, including bail matters, trials, \
             appeals, and quashing petitions. Specialized in white-collar crime, cyber offences, and \
             economic offences.",
            vec![
                Faq::new(
                    "What is the procedure for Anticipatory Bail?",
                    "Under Section 438 CrPC (now BNS equivalent), a person apprehending arrest may \
                     apply to the High Court or Court of Session for a direction that in the event of \
                     arrest, they shall be released on bail.",
                ),
                Faq::new(
                    "How does the new Bharatiya Nyaya Sanhita affect pending cases?",
                    "Procedural changes apply prospectively, while substantive offence definitions \
                     apply based on the date of the alleged offence. Expert legal analysis is required \
                     for specific transitional provisions.",
                ),
            ],
            &["civil-law", "family-law"],
        ),
        area(
            "civil-law",
            "Civil Litigation & Dispute Resolution",
            "Recovery suits, injunctions, and civil remedies across all judicial forums.",
            "Handling complex civil suits including property disputes, specific performance of \
             contracts, declaration suits, and money recovery proceedings.",
            vec![Faq::new(
                "What is the limitation period for filing a civil suit?",
                "Generally 3 years from the date of cause of action for most civil claims, subject to \
                 specific provisions of the Limitation Act, 1963.",
            )],
            &["property-law", "corporate-law"],
        ),
        area(
            "family-law",
            "Family & Matrimonial Law",
            "Divorce, custody, maintenance, and succession matters.",
            "Sensitive and private handling of matrimonial disputes, including mutual consent divorce, \
             contested divorce, child custody petitions, and domestic violence proceedings.",
            vec![Faq::new(
                "Can mutual consent divorce be expedited?",
                "The cooling-off period of 6 months can be waived by the Supreme Court under Article \
                 142 or by the Family Court under specific circumstances established by judicial \
                 precedents.",
            )],
            &["civil-law", "property-law"],
        ),
        area(
            "property-law",
            "Real Estate & Property Law",
            "Title verification, conveyance, and property dispute litigation.",
            "End-to-end legal support for real estate transactions, RERA compliance, tenant-landlord \
             disputes, and succession planning for immovable assets.",
            vec![Faq::new(
                "Is registration of a sale agreement mandatory?",
                "Yes, under the Registration Act, 1908, any document purporting to transfer rights in \
                 immovable property worth over Rs. 100 must be registered.",
            )],
            &["civil-law", "family-law"],
        ),
        area(
            "corporate-law",
            "Corporate & Commercial Law",
            "Company law compliance, M&A, and commercial contracts.",
            "Advisory and litigation support for NCLT matters, shareholder disputes, regulatory \
             compliance (SEBI/RBI), and commercial arbitration.",
            vec![Faq::new(
                "What triggers the Corporate Insolvency Resolution Process (CIRP)?",
                "A default of minimum Rs. 1 Crore by a corporate debtor allows a financial or \
                 operational creditor to file an application under the IBC.",
            )],
            &["civil-law", "criminal-law"],
        ),
    ]
}

fn area(
    slug: &str,
    title: &str,
    short_description: &str,
    full_description: &str,
    faqs: Vec<Faq>,
    related: &[&str],
) -> PracticeArea {
    PracticeArea {
        slug: slug.to_string(),
        title: title.to_string(),
        short_description: short_description.to_string(),
        full_description: full_description.to_string(),
        faqs,
        related_practices: related.iter().map(|s| s.to_string()).collect(),
    }
}
