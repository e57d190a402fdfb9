/// Synthesis subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("chapter generation failed for '{label}': {reason}")]
    ChapterFailed { label: String, reason: String },

    #[error("no synthesized book available to export")]
    NothingToExport,
}
