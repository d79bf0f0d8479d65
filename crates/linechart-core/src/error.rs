// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for validation and render failures; all non-fatal.

use thiserror::Error;

/// Everything a render pass can report. None of these escalate past the
/// renderer boundary: the scene is left showing an error panel and the
/// variant is returned to the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The chart description itself is absent.
    #[error("chart data is missing")]
    MissingData,

    /// The required title field is absent or empty.
    #[error("chart title is missing")]
    MissingTitle,

    /// The data field is absent or empty.
    #[error("chart data is invalid or empty")]
    InvalidData,

    /// A scale or draw stage failed (e.g. no finite values to build a domain).
    #[error("error rendering chart: {reason}")]
    RenderFailure { reason: String },
}

impl ChartError {
    /// Stable label shown in the error panel next to the reason.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::MissingData => "MissingData",
            ChartError::MissingTitle => "MissingTitle",
            ChartError::InvalidData => "InvalidData",
            ChartError::RenderFailure { .. } => "RenderFailure",
        }
    }
}

/// Dataset provider failures (malformed JSON or mismatched shape).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
