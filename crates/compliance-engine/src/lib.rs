//! ADGM corporate document review engine
//!
//! Takes extracted document text, classifies each document's legal type,
//! infers (or accepts) the business process, computes the required-document
//! delta, scans every document against the ADGM rule table, and assembles a
//! deterministic structured report.
//!
//! The pipeline is a single linear pass per run:
//! classify -> detect/override -> checklist -> scan -> build.

pub mod annotate;
pub mod checklist;
pub mod classifier;
pub mod error;
pub mod patterns;
pub mod process;
pub mod report;
pub mod rules;
pub mod scanner;

pub use annotate::{Annotator, PlainTextAnnotator};
pub use classifier::Classifier;
pub use error::AnalysisError;
pub use process::{ProcessDefinition, ProcessRegistry};
pub use rules::RuleTable;

use std::collections::HashSet;

use shared_types::{ComplianceReport, DocumentRecord, DocumentType, Finding, ProcessName};
use tracing::info;

/// How the business process is chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessSelector {
    /// Infer the process from the classified document types.
    Auto,
    /// Use this process verbatim; detection is skipped entirely.
    Explicit(ProcessName),
}

/// Result of a successful review run: the structured report plus the
/// per-document finding lists the annotator needs.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub report: ComplianceReport,
    /// (document id, findings in rule-table order), one entry per document
    /// in upload order.
    pub document_findings: Vec<(String, Vec<Finding>)>,
    /// Classified records, in upload order.
    pub documents: Vec<DocumentRecord>,
}

/// Engine facade holding the immutable configuration tables. Construct once,
/// reuse across runs.
pub struct ComplianceEngine {
    classifier: Classifier,
    registry: ProcessRegistry,
    rules: RuleTable,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::builtin(),
            registry: ProcessRegistry::builtin(),
            rules: RuleTable::builtin(),
        }
    }

    /// Run the full review pipeline over (filename, extracted text) pairs.
    ///
    /// The two caller-visible failures are an empty input set and an
    /// unresolvable auto-detection; everything else degrades into findings.
    pub fn review(
        &self,
        inputs: &[(String, String)],
        selector: ProcessSelector,
    ) -> Result<ReviewOutcome, AnalysisError> {
        if inputs.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        // Classify all documents first: even with an explicit process
        // override the checklist step needs inferred types.
        let documents: Vec<DocumentRecord> = inputs
            .iter()
            .map(|(filename, text)| {
                let mut record = DocumentRecord::new(filename.clone(), filename.clone(), text.clone());
                record.inferred_type = self.classifier.classify(text);
                info!(
                    document = %record.id,
                    doc_type = record.inferred_type.name(),
                    "classified document"
                );
                record
            })
            .collect();

        let uploaded_types: HashSet<DocumentType> =
            documents.iter().map(|d| d.inferred_type).collect();

        let process = match selector {
            ProcessSelector::Explicit(name) => self.registry.get(name),
            ProcessSelector::Auto => self.registry.detect(&uploaded_types)?,
        };
        info!(process = process.name.name(), "business process selected");

        let checklist = checklist::evaluate(process, &documents);

        let document_findings: Vec<(String, Vec<Finding>)> = documents
            .iter()
            .map(|doc| (doc.id.clone(), scanner::scan(&self.rules, doc)))
            .collect();

        // Aggregate ordering is by rule-table position, not scan order, so
        // the serialized report is reproducible however scans are scheduled.
        let mut all_findings: Vec<Finding> = document_findings
            .iter()
            .flat_map(|(_, findings)| findings.iter().cloned())
            .collect();
        all_findings.sort_by_key(|f| self.rules.ordering_key(&f.rule_id));

        info!(
            documents = documents.len(),
            findings = all_findings.len(),
            missing = checklist.missing_documents.len(),
            "review complete"
        );

        let report = report::build(process.name, &checklist, all_findings);

        Ok(ReviewOutcome {
            report,
            document_findings,
            documents,
        })
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
