//! The analyzer's output: concept map, themes, connections, tensions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::concept::{Concept, Connection, Tension, Theme};
use super::snapshot::concept_pairs;

/// Everything the Concept Analyzer produces for one corpus.
///
/// The concept map is a `HashMap` in memory; at the serialization
/// boundary it is encoded as a key-sorted array of pairs so the snapshot
/// round-trips byte-identically regardless of hash iteration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(with = "concept_pairs")]
    pub concepts: HashMap<String, Concept>,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub tensions: Vec<Tension>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Concepts sorted by descending occurrence count, then term.
    pub fn top_concepts(&self, limit: usize) -> Vec<&Concept> {
        let mut all: Vec<&Concept> = self.concepts.values().collect();
        all.sort_by(|a, b| {
            b.occurrence_count()
                .cmp(&a.occurrence_count())
                .then_with(|| a.term.cmp(&b.term))
        });
        all.truncate(limit);
        all
    }

    /// Terms connected to `term`, by descending connection strength.
    pub fn related_concepts(&self, term: &str, limit: usize) -> Vec<(String, usize)> {
        let mut related: Vec<(String, usize)> = self
            .connections
            .iter()
            .filter_map(|c| {
                if c.source == term {
                    Some((c.target.clone(), c.strength))
                } else if c.target == term {
                    Some((c.source.clone(), c.strength))
                } else {
                    None
                }
            })
            .collect();
        related.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        related.truncate(limit);
        related
    }

    /// Every concept must reference at least one chapter it was observed
    /// in. Returns the offending terms, empty when the invariant holds.
    pub fn missing_provenance(&self) -> Vec<&str> {
        self.concepts
            .values()
            .filter(|c| c.occurrences.is_empty())
            .map(|c| c.term.as_str())
            .collect()
    }
}
