/// Persistence errors. Save/load failures are logged and non-fatal at the
/// coordinator level; a failed load leaves in-memory state untouched.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("snapshot write failed at {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("snapshot read failed at {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("snapshot decode failed: {reason}")]
    DecodeFailed { reason: String },

    #[error("snapshot version {found} not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}
