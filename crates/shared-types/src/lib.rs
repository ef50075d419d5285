pub mod types;

pub use types::{
    ChecklistResult, ComplianceReport, ComplianceStatus, DocumentRecord, DocumentType, Finding,
    ProcessName, RiskLevel, Severity, TextAnchor,
};
