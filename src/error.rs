//! Error type shared by ingestion, layout and export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProofMapError {
    #[error("malformed number '{number}': {reason}")]
    MalformedNumber { number: String, reason: &'static str },

    #[error("node '{id}' has no number property")]
    MissingNumber { id: String },

    /// Raised by the layout engine under `DeepNodePolicy::Reject`.
    #[error("number '{number}' has depth {depth}, deeper than the layout supports")]
    UnsupportedDepth { number: String, depth: usize },

    #[error("invalid layout config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("coordinate of '{number}' overflows the layout plane")]
    CoordinateOverflow { number: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProofMapError>;
