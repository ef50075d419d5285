use thiserror::Error;

/// Caller-visible failures of a review run.
///
/// Everything else degrades in-band: an unreadable document becomes a
/// High-severity finding, an unclassifiable one becomes `Unknown`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no documents supplied")]
    EmptyInput,

    #[error("could not determine business process from uploaded document types; select one explicitly")]
    AutoDetectFailed,
}
