//! Static ADGM compliance rule table
//!
//! Rules are data: each entry names the documents it applies to, the clause
//! pattern it looks for, and whether the pattern must be present or must be
//! absent. The table order is the order findings are reported in, so the
//! concatenation below is part of the contract.

pub mod execution;
pub mod jurisdiction;
pub mod specific;

use regex::Regex;
use shared_types::{DocumentType, Severity};

/// Which documents a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Every document, including ones the classifier could not place.
    All,
    /// Every document with a recognised type. Unknown-typed documents get
    /// only the reduced `All` set.
    Known,
    /// Documents of one specific type.
    Type(DocumentType),
}

impl RuleScope {
    pub fn applies_to(&self, doc_type: DocumentType) -> bool {
        match self {
            RuleScope::All => true,
            RuleScope::Known => doc_type != DocumentType::Unknown,
            RuleScope::Type(t) => *t == doc_type,
        }
    }
}

/// Presence semantics of a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
    /// A finding is emitted when the pattern is absent.
    RequiredPresence,
    /// A finding is emitted when the pattern is present.
    Forbidden,
}

/// Clause pattern: either a keyword set (any hit counts) or a compiled regex.
#[derive(Debug, Clone)]
pub enum ClausePattern {
    Keywords(&'static [&'static str]),
    Regex(Regex),
}

impl ClausePattern {
    /// First matching keyword or regex match, if any.
    ///
    /// `text_lower` is the pre-lowered document text; keyword sets search it
    /// directly, regexes carry their own `(?i)` flag and run on the original.
    pub fn find_hit(&self, text: &str, text_lower: &str) -> Option<String> {
        match self {
            ClausePattern::Keywords(keywords) => keywords
                .iter()
                .find(|kw| text_lower.contains(**kw))
                .map(|kw| (*kw).to_string()),
            ClausePattern::Regex(re) => re.find(text).map(|m| m.as_str().to_string()),
        }
    }
}

/// One compliance rule, immutable once the table is built.
#[derive(Debug, Clone)]
pub struct ComplianceRule {
    pub id: &'static str,
    pub scope: RuleScope,
    pub mode: RuleMode,
    pub pattern: ClausePattern,
    pub severity: Severity,
    pub section_label: &'static str,
    pub message: &'static str,
    pub suggestion: &'static str,
}

impl ComplianceRule {
    pub fn keywords(
        id: &'static str,
        scope: RuleScope,
        mode: RuleMode,
        keywords: &'static [&'static str],
        severity: Severity,
        section_label: &'static str,
        message: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            id,
            scope,
            mode,
            pattern: ClausePattern::Keywords(keywords),
            severity,
            section_label,
            message,
            suggestion,
        }
    }

    pub fn regex(
        id: &'static str,
        scope: RuleScope,
        mode: RuleMode,
        pattern: &str,
        severity: Severity,
        section_label: &'static str,
        message: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            id,
            scope,
            mode,
            pattern: ClausePattern::Regex(
                Regex::new(&format!("(?i){pattern}")).expect("built-in rule pattern"),
            ),
            severity,
            section_label,
            message,
            suggestion,
        }
    }
}

/// The full rule table, in reporting order.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ComplianceRule>,
}

impl RuleTable {
    /// Built-in ADGM rule set: jurisdiction and governing-law checks first,
    /// then execution/structure checks, then document-specific requirements.
    pub fn builtin() -> Self {
        let mut rules = Vec::new();
        rules.extend(jurisdiction::rules());
        rules.extend(execution::rules());
        rules.extend(specific::rules());
        Self { rules }
    }

    pub fn rules(&self) -> &[ComplianceRule] {
        &self.rules
    }

    /// Rules applicable to one document type, in table order.
    pub fn rules_for(&self, doc_type: DocumentType) -> impl Iterator<Item = &ComplianceRule> {
        self.rules.iter().filter(move |r| r.scope.applies_to(doc_type))
    }

    /// Position of a rule in the table; used to order the aggregate finding
    /// list deterministically. Ids outside the table (the synthetic
    /// unreadable-document rule) sort first.
    pub fn ordering_key(&self, rule_id: &str) -> usize {
        self.rules
            .iter()
            .position(|r| r.id == rule_id)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}
