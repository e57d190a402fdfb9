//! The pipeline's linear phase state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline phases. Transitions are strictly forward; any phase may
/// transition to `Failed` on an unrecoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Ingesting,
    Analyzing,
    Meditating,
    Synthesizing,
    Ready,
    Failed,
}

impl Phase {
    /// The next phase in the forward sequence, if any.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Idle => Some(Phase::Ingesting),
            Phase::Ingesting => Some(Phase::Analyzing),
            Phase::Analyzing => Some(Phase::Meditating),
            Phase::Meditating => Some(Phase::Synthesizing),
            Phase::Synthesizing => Some(Phase::Ready),
            Phase::Ready | Phase::Failed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Ready | Phase::Failed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Ingesting => "ingesting",
            Phase::Analyzing => "analyzing",
            Phase::Meditating => "meditating",
            Phase::Synthesizing => "synthesizing",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Per-phase status notification sent to the progress sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Running,
    Completed,
}

/// Per-phase progress counters (0..=100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub ingestion: u8,
    pub analysis: u8,
    pub meditation: u8,
    pub synthesis: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_linearly_to_ready() {
        let mut phase = Phase::Idle;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            phase = next;
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                Phase::Idle,
                Phase::Ingesting,
                Phase::Analyzing,
                Phase::Meditating,
                Phase::Synthesizing,
                Phase::Ready,
            ]
        );
        assert!(phase.is_terminal());
    }

    #[test]
    fn failed_has_no_successor() {
        assert_eq!(Phase::Failed.next(), None);
    }
}
