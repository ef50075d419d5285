//! Annotator collaborator contract
//!
//! Container-format mutation (docx and friends) lives outside the engine.
//! The engine hands over findings with section labels and anchors; an
//! `Annotator` implementation turns the original bytes into a reviewed copy.

use anyhow::Result;
use shared_types::Finding;

pub trait Annotator {
    /// Produce an annotated copy of the original document carrying the
    /// findings as inline review comments.
    fn annotate(&self, original: &[u8], findings: &[Finding]) -> Result<Vec<u8>>;
}

/// Reference implementation over plain text: appends a review-comments block
/// listing each finding. Useful for tests and text-only pipelines.
pub struct PlainTextAnnotator;

impl Annotator for PlainTextAnnotator {
    fn annotate(&self, original: &[u8], findings: &[Finding]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(original)?;

        if findings.is_empty() {
            return Ok(original.to_vec());
        }

        let mut out = String::with_capacity(text.len() + findings.len() * 128);
        out.push_str(text);
        out.push_str("\n\nCOMPLIANCE REVIEW COMMENTS\n");
        for finding in findings {
            out.push_str(&format!(
                "\nISSUE: {}\nSeverity: {:?}\nSection: {}\nSuggestion: {}\n",
                finding.message, finding.severity, finding.section_label, finding.suggestion
            ));
        }

        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    fn finding(message: &str) -> Finding {
        Finding {
            document_id: "doc-1".to_string(),
            rule_id: "jurisdiction-required".to_string(),
            severity: Severity::High,
            section_label: "Jurisdiction".to_string(),
            message: message.to_string(),
            suggestion: "Add jurisdiction clause specifying ADGM Courts.".to_string(),
            snippet: None,
            anchor: None,
        }
    }

    #[test]
    fn appends_review_block_with_each_finding() {
        let annotated = PlainTextAnnotator
            .annotate(b"original document text", &[finding("Missing ADGM jurisdiction clause")])
            .unwrap();
        let text = String::from_utf8(annotated).unwrap();
        assert!(text.starts_with("original document text"));
        assert!(text.contains("COMPLIANCE REVIEW COMMENTS"));
        assert!(text.contains("Missing ADGM jurisdiction clause"));
        assert!(text.contains("Severity: High"));
    }

    #[test]
    fn clean_document_passes_through_unchanged() {
        let annotated = PlainTextAnnotator.annotate(b"clean text", &[]).unwrap();
        assert_eq!(annotated, b"clean text");
    }

    #[test]
    fn non_utf8_input_is_an_error() {
        let result = PlainTextAnnotator.annotate(&[0xff, 0xfe], &[finding("x")]);
        assert!(result.is_err());
    }
}
