//! Business process definitions and auto-detection
//!
//! Each ADGM process carries an ordered required-document checklist. Auto
//! detection picks the process whose checklist best overlaps the classified
//! upload set; ties fall back to absolute matched count, then declared
//! priority order.

use std::collections::HashSet;

use shared_types::{DocumentType, ProcessName};
use tracing::debug;

use crate::error::AnalysisError;

/// One business process and its required-document checklist.
/// The checklist order is the order missing documents are reported in.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessDefinition {
    pub name: ProcessName,
    pub required_documents: Vec<DocumentType>,
}

/// Immutable set of known process definitions, declared in detection
/// priority order. Built once at startup and passed explicitly.
#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    definitions: Vec<ProcessDefinition>,
}

impl ProcessRegistry {
    /// The built-in ADGM process checklists.
    pub fn builtin() -> Self {
        let definitions = vec![
            ProcessDefinition {
                name: ProcessName::CompanyIncorporation,
                required_documents: vec![
                    DocumentType::ArticlesOfAssociation,
                    DocumentType::MemorandumOfAssociation,
                    DocumentType::BoardResolution,
                    DocumentType::ShareholderResolution,
                    DocumentType::UboDeclaration,
                    DocumentType::RegisterOfMembers,
                    DocumentType::IncorporationApplication,
                    DocumentType::AddressChangeNotice,
                ],
            },
            ProcessDefinition {
                name: ProcessName::LicensingApplication,
                required_documents: vec![
                    DocumentType::Licensing,
                    DocumentType::CompliancePolicy,
                    DocumentType::Commercial,
                ],
            },
            ProcessDefinition {
                name: ProcessName::RegulatoryCompliance,
                required_documents: vec![
                    DocumentType::CompliancePolicy,
                    DocumentType::UboDeclaration,
                    DocumentType::RegisterOfMembers,
                ],
            },
        ];
        Self { definitions }
    }

    pub fn get(&self, name: ProcessName) -> &ProcessDefinition {
        // The registry holds a definition for every ProcessName variant.
        self.definitions
            .iter()
            .find(|d| d.name == name)
            .expect("registry covers all process variants")
    }

    pub fn all(&self) -> &[ProcessDefinition] {
        &self.definitions
    }

    /// Infer the business process from the classified upload set.
    ///
    /// Scoring: overlap ratio = matched required types / required count.
    /// Ratios are compared by integer cross-multiplication so ties are exact.
    /// Zero overlap everywhere is an `AutoDetectFailed`; the caller must then
    /// require an explicit selection.
    pub fn detect(
        &self,
        document_types: &HashSet<DocumentType>,
    ) -> Result<&ProcessDefinition, AnalysisError> {
        let mut best: Option<(&ProcessDefinition, usize)> = None;

        for candidate in &self.definitions {
            let matched = candidate
                .required_documents
                .iter()
                .filter(|t| document_types.contains(t))
                .count();
            debug!(
                process = candidate.name.name(),
                matched,
                required = candidate.required_documents.len(),
                "process overlap"
            );
            if matched == 0 {
                continue;
            }

            match best {
                None => best = Some((candidate, matched)),
                Some((current, current_matched)) => {
                    // ratio comparison: matched/req > current_matched/current_req
                    let lhs = matched * current.required_documents.len();
                    let rhs = current_matched * candidate.required_documents.len();
                    let better = lhs > rhs || (lhs == rhs && matched > current_matched);
                    // declared order wins remaining ties, so never replace on equality
                    if better {
                        best = Some((candidate, matched));
                    }
                }
            }
        }

        best.map(|(def, _)| def).ok_or(AnalysisError::AutoDetectFailed)
    }
}
