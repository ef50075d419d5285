//! Jurisdiction and governing-law rules
//!
//! ADGM documents must name ADGM (or ADGM Courts) as the forum and must not
//! defer to UAE federal, Dubai, or DIFC courts or law. Constitutional
//! documents additionally need an explicit governing-law clause.

use shared_types::{DocumentType, Severity};

use crate::patterns::{
    ADGM_JURISDICTION_KEYWORDS, FORBIDDEN_GOVERNING_LAW_KEYWORDS, FORBIDDEN_JURISDICTION_KEYWORDS,
};
use crate::rules::{ComplianceRule, RuleMode, RuleScope};

pub fn rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::keywords(
            "jurisdiction-forbidden",
            RuleScope::Known,
            RuleMode::Forbidden,
            FORBIDDEN_JURISDICTION_KEYWORDS,
            Severity::High,
            "Jurisdiction",
            "Document refers to a non-ADGM court or forum",
            "Update jurisdiction to ADGM Courts.",
        ),
        ComplianceRule::keywords(
            "jurisdiction-required",
            RuleScope::All,
            RuleMode::RequiredPresence,
            ADGM_JURISDICTION_KEYWORDS,
            Severity::High,
            "Jurisdiction",
            "Missing ADGM jurisdiction clause",
            "Add jurisdiction clause specifying ADGM Courts.",
        ),
        ComplianceRule::keywords(
            "governing-law-forbidden",
            RuleScope::Known,
            RuleMode::Forbidden,
            FORBIDDEN_GOVERNING_LAW_KEYWORDS,
            Severity::High,
            "Governing Law",
            "Document specifies a non-ADGM governing law",
            "Update governing law to ADGM/English law.",
        ),
        ComplianceRule::regex(
            "aoa-governing-law",
            RuleScope::Type(DocumentType::ArticlesOfAssociation),
            RuleMode::RequiredPresence,
            r"governing\s+law",
            Severity::Medium,
            "Governing Law",
            "Missing governing law clause",
            "Add ADGM governing law specification.",
        ),
        ComplianceRule::regex(
            "moa-governing-law",
            RuleScope::Type(DocumentType::MemorandumOfAssociation),
            RuleMode::RequiredPresence,
            r"governing\s+law",
            Severity::Medium,
            "Governing Law",
            "Missing governing law clause",
            "Add ADGM governing law specification.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_jurisdiction_pattern_hits_dubai_courts() {
        let rules = rules();
        let forbidden = rules
            .iter()
            .find(|r| r.id == "jurisdiction-forbidden")
            .unwrap();
        let text = "Disputes shall be settled by the Dubai Courts.";
        let lower = text.to_lowercase();
        assert!(forbidden.pattern.find_hit(text, &lower).is_some());
    }

    #[test]
    fn adgm_jurisdiction_pattern_accepts_full_name() {
        let rules = rules();
        let required = rules
            .iter()
            .find(|r| r.id == "jurisdiction-required")
            .unwrap();
        let text = "Subject to the jurisdiction of the Abu Dhabi Global Market.";
        let lower = text.to_lowercase();
        assert!(required.pattern.find_hit(text, &lower).is_some());
    }

    #[test]
    fn governing_law_clause_matches_case_insensitively() {
        let rules = rules();
        let aoa = rules.iter().find(|r| r.id == "aoa-governing-law").unwrap();
        let text = "GOVERNING LAW: these articles are governed by ADGM regulations.";
        let lower = text.to_lowercase();
        assert!(aoa.pattern.find_hit(text, &lower).is_some());
    }
}
