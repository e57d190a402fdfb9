//! Error taxonomy: one sub-error enum per subsystem, aggregated into
//! [`NoesisError`] with `#[from]` conversions.

mod persist_error;
mod phase_error;
mod source_error;
mod synthesis_error;

pub use persist_error::PersistError;
pub use phase_error::PhaseError;
pub use source_error::SourceError;
pub use synthesis_error::SynthesisError;

/// Result alias used throughout the workspace.
pub type NoesisResult<T> = Result<T, NoesisError>;

/// Top-level error for the noesis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum NoesisError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("phase error: {0}")]
    Phase(#[from] PhaseError),

    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}
