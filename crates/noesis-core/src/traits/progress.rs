use crate::models::{Phase, PhaseStatus};

/// Receives progress reporting from every pipeline stage.
///
/// Within a single phase, `percent` is monotonically non-decreasing and
/// reaches exactly 100 on completion.
pub trait ProgressSink: Send + Sync {
    fn progress(&self, phase: Phase, percent: u8, label: &str);

    fn phase_status(&self, phase: Phase, status: PhaseStatus);
}

/// Default sink that forwards progress to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn progress(&self, phase: Phase, percent: u8, label: &str) {
        tracing::debug!(%phase, percent, label, "progress");
    }

    fn phase_status(&self, phase: Phase, status: PhaseStatus) {
        tracing::info!(%phase, ?status, "phase status");
    }
}
