//! Execution and document-structure rules

use shared_types::Severity;

use crate::patterns::{SIGNATURE_KEYWORDS, STRUCTURE_KEYWORDS};
use crate::rules::{ComplianceRule, RuleMode, RuleScope};

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::keywords(
            "signature-block",
            RuleScope::All,
            RuleMode::RequiredPresence,
            SIGNATURE_KEYWORDS,
            Severity::Medium,
            "Execution",
            "Missing signature section",
            "Add proper signature blocks with witness details.",
        ),
        ComplianceRule::keywords(
            "document-structure",
            RuleScope::Known,
            RuleMode::RequiredPresence,
            STRUCTURE_KEYWORDS,
            Severity::Low,
            "Document Requirements",
            "Document lacks clause or section structure",
            "Organise the document into numbered clauses and sections.",
        ),
    ]
}
