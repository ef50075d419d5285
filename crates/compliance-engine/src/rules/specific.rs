//! Document-type specific content requirements

use shared_types::{DocumentType, Severity};

use crate::rules::{ComplianceRule, RuleMode, RuleScope};

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::regex(
            "aoa-share-capital",
            RuleScope::Type(DocumentType::ArticlesOfAssociation),
            RuleMode::RequiredPresence,
            r"share\s+capital|\bcapital\b",
            Severity::Medium,
            "Share Capital",
            "Missing share capital information",
            "Include share capital structure and classes.",
        ),
        ComplianceRule::regex(
            "ubo-ownership",
            RuleScope::Type(DocumentType::UboDeclaration),
            RuleMode::RequiredPresence,
            r"percentage|ownership",
            Severity::High,
            "Beneficial Ownership",
            "Missing ownership percentages",
            "Include beneficial ownership percentages.",
        ),
        ComplianceRule::regex(
            "employment-termination",
            RuleScope::Type(DocumentType::Employment),
            RuleMode::RequiredPresence,
            r"termination|\bnotice\b",
            Severity::Medium,
            "Employment Terms",
            "Missing termination clauses",
            "Include termination and notice provisions.",
        ),
    ]
}
