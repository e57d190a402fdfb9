use crate::models::Phase;

/// Phase-level errors raised by the coordinator or a running phase.
#[derive(Debug, thiserror::Error)]
pub enum PhaseError {
    #[error("phase {phase} cancelled")]
    Cancelled { phase: Phase },

    #[error("phase {phase} failed: {reason}")]
    Failed { phase: Phase, reason: String },

    #[error("pipeline already failed, restart required")]
    AlreadyFailed,
}
