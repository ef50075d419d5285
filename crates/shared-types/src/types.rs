/// Legal document categories recognised by the classifier.
///
/// The set is closed: anything the classifier cannot place lands on `Unknown`
/// rather than failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DocumentType {
    ArticlesOfAssociation,
    MemorandumOfAssociation,
    BoardResolution,
    ShareholderResolution,
    IncorporationApplication,
    UboDeclaration,
    RegisterOfMembers,
    AddressChangeNotice,
    Licensing,
    Employment,
    Commercial,
    CompliancePolicy,
    Unknown,
}

impl DocumentType {
    /// Human-readable name, as it appears in checklists and reports.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentType::ArticlesOfAssociation => "Articles of Association",
            DocumentType::MemorandumOfAssociation => "Memorandum of Association",
            DocumentType::BoardResolution => "Board Resolution",
            DocumentType::ShareholderResolution => "Shareholder Resolution",
            DocumentType::IncorporationApplication => "Incorporation Application Form",
            DocumentType::UboDeclaration => "UBO Declaration Form",
            DocumentType::RegisterOfMembers => "Register of Members and Directors",
            DocumentType::AddressChangeNotice => "Change of Registered Address Notice",
            DocumentType::Licensing => "Licensing Application Form",
            DocumentType::Employment => "Employment Contract",
            DocumentType::Commercial => "Commercial Agreement",
            DocumentType::CompliancePolicy => "Compliance Policy",
            DocumentType::Unknown => "Unknown Document",
        }
    }
}

/// ADGM business processes the checklist engine knows about.
///
/// Declaration order is the detection priority order: when auto-detection
/// ties on overlap, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ProcessName {
    CompanyIncorporation,
    LicensingApplication,
    RegulatoryCompliance,
}

impl ProcessName {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessName::CompanyIncorporation => "Company Incorporation",
            ProcessName::LicensingApplication => "Licensing Application",
            ProcessName::RegulatoryCompliance => "Regulatory Compliance",
        }
    }

    /// All processes, in declared detection-priority order.
    pub fn in_priority_order() -> &'static [ProcessName] {
        &[
            ProcessName::CompanyIncorporation,
            ProcessName::LicensingApplication,
            ProcessName::RegulatoryCompliance,
        ]
    }
}

/// Finding severity. Ordering follows declaration: Low < Medium < High.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One ingested document, after text extraction.
///
/// `inferred_type` starts as `Unknown` and is set exactly once by the
/// classifier; nothing downstream mutates the record.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub source_path: String,
    pub raw_text: String,
    pub inferred_type: DocumentType,
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>, source_path: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_path: source_path.into(),
            raw_text: raw_text.into(),
            inferred_type: DocumentType::Unknown,
        }
    }
}

/// Byte-offset span in the extracted text, for the annotator to anchor an
/// inline comment near the matched clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextAnchor {
    pub start_offset: usize,
    pub end_offset: usize,
}

/// One detected compliance issue, tied to one document and one rule.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub document_id: String,
    pub rule_id: String,
    pub severity: Severity,
    pub section_label: String,
    pub message: String,
    pub suggestion: String,
    pub snippet: Option<String>,
    pub anchor: Option<TextAnchor>,
}

/// Checklist delta for one process: which required documents are missing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChecklistResult {
    pub missing_documents: Vec<DocumentType>,
    pub documents_uploaded: usize,
    pub required_documents: usize,
}

impl ChecklistResult {
    /// Percentage of required documents present, rounded to two decimals.
    pub fn completeness_percentage(&self) -> f64 {
        if self.required_documents == 0 {
            return 100.0;
        }
        let present = self.required_documents - self.missing_documents.len();
        let pct = present as f64 / self.required_documents as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// Three-tier risk classification derived from the compliance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Step function over the score: >= 80 Low, 60-79 Medium, < 60 High.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            RiskLevel::Low
        } else if score >= 60.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Overall compliance standing shown in the human-readable summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ComplianceStatus {
    FullyCompliant,
    PartiallyCompliant,
    NonCompliant,
}

/// Final structured output of a review run. Built once, never mutated,
/// serialized as-is for the rendering layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceReport {
    pub process: ProcessName,
    pub documents_uploaded: usize,
    pub required_documents: usize,
    pub missing_documents: Vec<DocumentType>,
    pub compliance_score: f64,
    pub risk_level: RiskLevel,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    pub fn high_severity_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::High)
            .count()
    }

    pub fn compliance_status(&self) -> ComplianceStatus {
        if self.findings.is_empty() && self.missing_documents.is_empty() {
            ComplianceStatus::FullyCompliant
        } else if self.high_severity_count() == 0 {
            ComplianceStatus::PartiallyCompliant
        } else {
            ComplianceStatus::NonCompliant
        }
    }

    /// Short human-readable status block, one observation per line.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(
            match self.compliance_status() {
                ComplianceStatus::FullyCompliant => "Fully Compliant",
                ComplianceStatus::PartiallyCompliant => "Partially Compliant",
                ComplianceStatus::NonCompliant => "Non-Compliant",
            }
            .to_string(),
        );

        if self.missing_documents.is_empty() {
            lines.push("All required documents present".to_string());
        } else {
            lines.push(format!(
                "Missing {} required document(s)",
                self.missing_documents.len()
            ));
        }

        let present = self.required_documents - self.missing_documents.len();
        let completeness = if self.required_documents == 0 {
            100.0
        } else {
            (present as f64 / self.required_documents as f64 * 10000.0).round() / 100.0
        };
        lines.push(format!("Document completeness: {}%", completeness));

        if self.findings.is_empty() {
            lines.push("No compliance issues found".to_string());
        } else {
            lines.push(format!("Found {} compliance issue(s)", self.findings.len()));
            let high = self.high_severity_count();
            if high > 0 {
                lines.push(format!("{} high severity issue(s)", high));
            }
        }

        lines.join("\n")
    }
}
