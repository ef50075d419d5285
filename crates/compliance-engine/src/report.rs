//! Report building and scoring
//!
//! Pure aggregation: no I/O, no clock, so two runs over the same input
//! serialize to the same bytes.

use shared_types::{
    ChecklistResult, ComplianceReport, Finding, ProcessName, RiskLevel, Severity,
};

/// Points deducted per missing required document.
const MISSING_DOCUMENT_PENALTY: f64 = 10.0;

fn severity_penalty(severity: Severity) -> f64 {
    match severity {
        Severity::High => 15.0,
        Severity::Medium => 7.0,
        Severity::Low => 3.0,
    }
}

/// Score: start at 100, deduct per missing document and per finding by
/// severity weight, floor at 0.
pub fn compliance_score(checklist: &ChecklistResult, findings: &[Finding]) -> f64 {
    let mut score = 100.0;
    score -= checklist.missing_documents.len() as f64 * MISSING_DOCUMENT_PENALTY;
    for finding in findings {
        score -= severity_penalty(finding.severity);
    }
    score.max(0.0)
}

/// Assemble the final report from the checklist delta and the aggregated
/// finding list (already in rule-table order).
pub fn build(
    process: ProcessName,
    checklist: &ChecklistResult,
    findings: Vec<Finding>,
) -> ComplianceReport {
    let score = compliance_score(checklist, &findings);
    let recommendations = recommendations(checklist, &findings);

    ComplianceReport {
        process,
        documents_uploaded: checklist.documents_uploaded,
        required_documents: checklist.required_documents,
        missing_documents: checklist.missing_documents.clone(),
        compliance_score: score,
        risk_level: RiskLevel::from_score(score),
        findings,
        recommendations,
    }
}

/// Actionable recommendations: the missing-document upload prompt first,
/// then finding suggestions de-duplicated in first-seen order.
fn recommendations(checklist: &ChecklistResult, findings: &[Finding]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !checklist.missing_documents.is_empty() {
        let names: Vec<_> = checklist
            .missing_documents
            .iter()
            .map(|t| t.name())
            .collect();
        recommendations.push(format!("Upload missing documents: {}", names.join(", ")));
    }

    for finding in findings {
        if !recommendations.contains(&finding.suggestion) {
            recommendations.push(finding.suggestion.clone());
        }
    }

    if recommendations.is_empty() {
        recommendations.push("Documents appear compliant. Proceed with submission.".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::DocumentType;

    fn checklist(missing: Vec<DocumentType>, uploaded: usize, required: usize) -> ChecklistResult {
        ChecklistResult {
            missing_documents: missing,
            documents_uploaded: uploaded,
            required_documents: required,
        }
    }

    fn finding(rule_id: &str, severity: Severity, suggestion: &str) -> Finding {
        Finding {
            document_id: "doc-1".to_string(),
            rule_id: rule_id.to_string(),
            severity,
            section_label: "Jurisdiction".to_string(),
            message: "msg".to_string(),
            suggestion: suggestion.to_string(),
            snippet: None,
            anchor: None,
        }
    }

    #[test]
    fn clean_run_scores_one_hundred() {
        let report = build(
            ProcessName::CompanyIncorporation,
            &checklist(vec![], 8, 8),
            vec![],
        );
        assert_eq!(report.compliance_score, 100.0);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(
            report.recommendations,
            vec!["Documents appear compliant. Proceed with submission.".to_string()]
        );
    }

    #[test]
    fn missing_documents_cost_ten_points_each() {
        let report = build(
            ProcessName::CompanyIncorporation,
            &checklist(
                vec![DocumentType::UboDeclaration, DocumentType::BoardResolution],
                6,
                8,
            ),
            vec![],
        );
        assert_eq!(report.compliance_score, 80.0);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn severity_weights_apply_cumulatively() {
        let findings = vec![
            finding("a", Severity::High, "fix a"),
            finding("b", Severity::Medium, "fix b"),
            finding("c", Severity::Low, "fix c"),
        ];
        let report = build(
            ProcessName::RegulatoryCompliance,
            &checklist(vec![], 3, 3),
            findings,
        );
        assert_eq!(report.compliance_score, 75.0);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn score_floors_at_zero() {
        let findings: Vec<_> = (0..20)
            .map(|i| finding(&format!("r{i}"), Severity::High, "fix"))
            .collect();
        let report = build(
            ProcessName::CompanyIncorporation,
            &checklist(
                vec![DocumentType::ArticlesOfAssociation; 8],
                0,
                8,
            ),
            findings,
        );
        assert_eq!(report.compliance_score, 0.0);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn forbidden_clause_reduces_score_despite_complete_checklist() {
        let report = build(
            ProcessName::CompanyIncorporation,
            &checklist(vec![], 8, 8),
            vec![finding("jurisdiction-forbidden", Severity::High, "fix")],
        );
        assert!(report.compliance_score < 100.0);
        assert_eq!(report.compliance_score, 85.0);
    }

    #[test]
    fn recommendations_dedupe_and_keep_first_seen_order() {
        let findings = vec![
            finding("a", Severity::Medium, "Add jurisdiction clause specifying ADGM Courts."),
            finding("b", Severity::Medium, "Add proper signature blocks with witness details."),
            finding("c", Severity::Medium, "Add jurisdiction clause specifying ADGM Courts."),
        ];
        let report = build(
            ProcessName::LicensingApplication,
            &checklist(vec![DocumentType::Commercial], 2, 3),
            findings,
        );
        assert_eq!(
            report.recommendations,
            vec![
                "Upload missing documents: Commercial Agreement".to_string(),
                "Add jurisdiction clause specifying ADGM Courts.".to_string(),
                "Add proper signature blocks with witness details.".to_string(),
            ]
        );
    }
}
