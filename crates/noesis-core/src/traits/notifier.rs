use crate::models::Phase;

/// Outbound event notifications emitted at pipeline milestones.
pub trait Notifier: Send + Sync {
    /// A phase finished successfully.
    fn phase_completed(&self, phase: Phase);

    /// The whole pipeline reached `Ready`.
    fn pipeline_ready(&self);

    /// The pipeline failed; `reason` is a human-readable summary.
    fn pipeline_failed(&self, reason: &str);
}

/// Fallback notifier that writes milestones to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn phase_completed(&self, phase: Phase) {
        tracing::info!(%phase, "phase completed");
    }

    fn pipeline_ready(&self) {
        tracing::info!("pipeline ready");
    }

    fn pipeline_failed(&self, reason: &str) {
        tracing::warn!(reason, "pipeline failed");
    }
}
