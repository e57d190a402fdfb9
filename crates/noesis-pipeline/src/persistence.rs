//! Snapshot persistence: whole-state JSON on disk, written atomically
//! via a temp file rename.

use std::path::{Path, PathBuf};

use noesis_core::errors::PersistError;
use noesis_core::models::snapshot::SNAPSHOT_VERSION;
use noesis_core::models::PipelineSnapshot;
use tracing::debug;

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Serialize and write the snapshot. Write goes to a sibling temp
    /// file first so a crash mid-write never corrupts the last good
    /// snapshot.
    pub fn save(&self, snapshot: &PipelineSnapshot) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| PersistError::WriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| PersistError::WriteFailed {
            path: tmp.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| PersistError::WriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Read and decode the snapshot, rejecting unknown versions.
    pub fn load(&self) -> Result<PipelineSnapshot, PersistError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| PersistError::ReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let snapshot: PipelineSnapshot =
            serde_json::from_str(&json).map_err(|e| PersistError::DecodeFailed {
                reason: e.to_string(),
            })?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
