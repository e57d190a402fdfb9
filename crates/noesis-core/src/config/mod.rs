//! Configuration: per-subsystem sections with serde defaults, loadable
//! from TOML. Missing sections and keys take defaults.

pub mod defaults;

mod analysis_config;
mod corpus_config;
mod dialogue_config;
mod meditation_config;
mod synthesis_config;

pub use analysis_config::{default_tension_pairs, AnalysisConfig};
pub use corpus_config::CorpusConfig;
pub use dialogue_config::DialogueConfig;
pub use meditation_config::MeditationConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{NoesisError, NoesisResult};

/// Whole-system configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoesisConfig {
    pub corpus: CorpusConfig,
    pub analysis: AnalysisConfig,
    pub meditation: MeditationConfig,
    pub synthesis: SynthesisConfig,
    pub dialogue: DialogueConfig,
    pub persistence: PersistenceConfig,
    pub observability: ObservabilityConfig,
}

impl NoesisConfig {
    /// Parse a config from a TOML string. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml(input: &str) -> NoesisResult<Self> {
        toml::from_str(input).map_err(|e| NoesisError::Config {
            reason: e.to_string(),
        })
    }
}

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Path of the whole-state JSON snapshot.
    pub snapshot_path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: defaults::DEFAULT_SNAPSHOT_PATH.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when NOESIS_LOG is unset.
    pub log_level: String,
    /// Emit JSON-formatted log lines.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}
