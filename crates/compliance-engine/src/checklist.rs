//! Checklist delta computation
//!
//! Pure set-difference over inferred document types: duplicates of the same
//! type count once toward coverage, and the missing list keeps the order the
//! process definition declares.

use std::collections::HashSet;

use shared_types::{ChecklistResult, DocumentRecord};

use crate::process::ProcessDefinition;

/// Compute which required documents are missing for a process.
pub fn evaluate(process: &ProcessDefinition, documents: &[DocumentRecord]) -> ChecklistResult {
    let uploaded_types: HashSet<_> = documents.iter().map(|d| d.inferred_type).collect();

    let missing_documents: Vec<_> = process
        .required_documents
        .iter()
        .filter(|t| !uploaded_types.contains(t))
        .copied()
        .collect();

    ChecklistResult {
        missing_documents,
        documents_uploaded: documents.len(),
        required_documents: process.required_documents.len(),
    }
}
