//! Durable pipeline state.
//!
//! The snapshot deliberately excludes the raw corpus: books are
//! re-ingested from their source on restore, while derived artifacts
//! (analysis, meditation, synthesis, dialogue) are carried over as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisReport;
use super::dialogue::DialogueTurn;
use super::insight::MeditationHistory;
use super::phase::{Phase, PhaseProgress};
use super::synthesis::SynthesizedBook;

/// Bumped whenever the snapshot layout changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub phase: Phase,
    pub progress: PhaseProgress,
    #[serde(default)]
    pub analysis: Option<AnalysisReport>,
    #[serde(default)]
    pub meditation: MeditationHistory,
    #[serde(default)]
    pub synthesis: Option<SynthesizedBook>,
    #[serde(default)]
    pub dialogue: Vec<DialogueTurn>,
}

impl PipelineSnapshot {
    pub fn new(phase: Phase, progress: PhaseProgress) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            phase,
            progress,
            analysis: None,
            meditation: MeditationHistory::default(),
            synthesis: None,
            dialogue: Vec::new(),
        }
    }
}

/// Serde adapter that writes a concept map as a key-sorted list of
/// pairs, so snapshots are byte-stable across runs.
pub mod concept_pairs {
    use std::collections::HashMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::models::concept::Concept;

    pub fn serialize<S>(map: &HashMap<String, Concept>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pairs: Vec<(&String, &Concept)> = map.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Concept>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs: Vec<(String, Concept)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::concept::{Concept, Occurrence};
    use crate::models::keys::ChapterKey;

    #[test]
    fn concept_map_serializes_key_sorted() {
        let mut report = AnalysisReport::default();
        for term in ["zenith", "anchor", "middle"] {
            let mut concept = Concept::new(term);
            concept.occurrences.push(Occurrence {
                chapter: ChapterKey::derive("b", "s", "c"),
                book_id: "b".into(),
                frequency: 2,
            });
            report.concepts.insert(term.to_string(), concept);
        }
        let json = serde_json::to_string(&report).unwrap();
        let anchor = json.find("anchor").unwrap();
        let middle = json.find("middle").unwrap();
        let zenith = json.find("zenith").unwrap();
        assert!(anchor < middle && middle < zenith);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = PipelineSnapshot::new(Phase::Ready, PhaseProgress::default());
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: PipelineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.version, SNAPSHOT_VERSION);
        assert_eq!(restored.phase, Phase::Ready);
        assert!(restored.analysis.is_none());
        assert!(restored.dialogue.is_empty());
    }
}
