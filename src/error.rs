//! Error types with actionable diagnostics.
//!
//! Every variant carries the contextual values a caller needs to resolve
//! the problem without consulting external documentation.

use thiserror::Error;

/// Result type alias for generar operations.
pub type Result<T> = std::result::Result<T, GenerarError>;

/// Errors that can occur in evaluation and scheduling.
#[derive(Error, Debug)]
pub enum GenerarError {
    /// Generated and reference corpora have different sample counts.
    #[error("Corpus length mismatch: {generated} generated vs {reference} reference samples\n  → Generated and reference corpora must be parallel")]
    CorpusLengthMismatch { generated: usize, reference: usize },

    /// Evaluation requested over zero samples.
    #[error("Cannot evaluate an empty corpus\n  → Provide at least one generated/reference sample pair")]
    EmptyCorpus,

    /// Schedule constructed with a warmup phase of zero steps.
    #[error("Invalid warmup step count: {steps}\n  → warmup_steps must be at least 1")]
    InvalidWarmup { steps: usize },

    /// Schedule constructed with a model dimension of zero.
    #[error("Invalid model dimension: {dim}\n  → d_model must be at least 1")]
    InvalidDimension { dim: usize },

    /// Optimizer state restored onto an optimizer with a different layout.
    #[error("Optimizer state mismatch: expected {expected} entries, got {actual}\n  → Restore state onto an optimizer with the same parameter layout")]
    StateMismatch { expected: usize, actual: usize },
}
