//! Document type classification
//!
//! Case-insensitive phrase matching against an explicit priority-ordered
//! table. The first type whose phrase set hits wins, so a document that
//! carries boilerplate from several templates classifies the same way on
//! every run. No signal at all yields `DocumentType::Unknown`.

use regex::Regex;
use shared_types::DocumentType;

/// Discriminating phrase sets per document type, in detection priority order.
///
/// Priority is data, not code order elsewhere: tests assert on this table
/// directly.
const PHRASE_TABLE: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::ArticlesOfAssociation,
        &[
            r"articles\s+of\s+association",
            r"\baoa\b",
            r"company\s+constitution",
            r"internal\s+regulations",
        ],
    ),
    (
        DocumentType::MemorandumOfAssociation,
        &[
            r"memorandum\s+of\s+association",
            r"\bmoa\b",
            r"company\s+objectives",
            r"business\s+purpose",
        ],
    ),
    (
        DocumentType::BoardResolution,
        &[
            r"board\s+resolution",
            r"directors'?\s+resolution",
            r"board\s+decision",
            r"directors'?\s+meeting",
        ],
    ),
    (
        DocumentType::ShareholderResolution,
        &[
            r"shareholders?'?\s+resolution",
            r"members'?\s+resolution",
            r"general\s+meeting\s+resolution",
        ],
    ),
    (
        DocumentType::IncorporationApplication,
        &[
            r"incorporation\s+application",
            r"application\s+for\s+incorporation",
            r"company\s+formation\s+application",
        ],
    ),
    (
        DocumentType::UboDeclaration,
        &[
            r"ubo\s+declaration",
            r"ultimate\s+beneficial\s+owner",
            r"beneficial\s+ownership",
            r"ownership\s+structure",
        ],
    ),
    (
        DocumentType::RegisterOfMembers,
        &[
            r"register\s+of\s+members",
            r"register\s+of\s+directors",
        ],
    ),
    (
        DocumentType::AddressChangeNotice,
        &[
            r"change\s+of\s+registered\s+address",
            r"address\s+change\s+notice",
            r"registered\s+office\s+address",
        ],
    ),
    (
        DocumentType::Licensing,
        &[
            r"licen[cs]e\s+application",
            r"licensing\s+application",
            r"financial\s+services\s+permission",
        ],
    ),
    (
        DocumentType::Employment,
        &[
            r"employment\s+contract",
            r"employment\s+agreement",
            r"staff\s+contract",
            r"employee\s+terms",
        ],
    ),
    (
        DocumentType::Commercial,
        &[
            r"commercial\s+agreement",
            r"services\s+agreement",
            r"supply\s+agreement",
            r"purchase\s+agreement",
        ],
    ),
    (
        DocumentType::CompliancePolicy,
        &[
            r"compliance\s+manual",
            r"compliance\s+policy",
            r"regulatory\s+compliance",
            r"compliance\s+framework",
            r"anti.money\s+laundering",
        ],
    ),
];

/// Phrase-table classifier. Patterns are compiled once at construction and
/// the table is immutable afterwards.
pub struct Classifier {
    entries: Vec<(DocumentType, Vec<Regex>)>,
}

impl Classifier {
    /// Build the classifier from the built-in ADGM phrase table.
    pub fn builtin() -> Self {
        let entries = PHRASE_TABLE
            .iter()
            .map(|(doc_type, phrases)| {
                let patterns = phrases
                    .iter()
                    .map(|p| Regex::new(&format!("(?i){}", p)).expect("built-in phrase pattern"))
                    .collect();
                (*doc_type, patterns)
            })
            .collect();
        Self { entries }
    }

    /// Classify extracted text. Never fails: no hit means `Unknown`.
    pub fn classify(&self, text: &str) -> DocumentType {
        if text.trim().is_empty() {
            return DocumentType::Unknown;
        }
        for (doc_type, patterns) in &self.entries {
            if patterns.iter().any(|p| p.is_match(text)) {
                return *doc_type;
            }
        }
        DocumentType::Unknown
    }

    /// Detection priority order, as declared in the phrase table.
    pub fn priority_order(&self) -> Vec<DocumentType> {
        self.entries.iter().map(|(t, _)| *t).collect()
    }
}
