use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::concept::ThematicCategory;

/// Concept analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum per-chapter frequency for a term to become a concept.
    pub min_term_frequency: usize,
    /// Concepts retained per chapter, by descending frequency.
    pub max_concepts_per_chapter: usize,
    /// Concepts a category needs before it is emitted as a theme.
    pub theme_min_concepts: usize,
    /// Shared chapters two concepts need before they connect.
    pub min_shared_chapters: usize,
    /// Thematic categories used for classification and theme grouping.
    pub categories: Vec<ThematicCategory>,
    /// Concept pole pairs probed for dialectic tensions.
    pub tension_pairs: Vec<(String, String)>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_term_frequency: defaults::DEFAULT_MIN_TERM_FREQUENCY,
            max_concepts_per_chapter: defaults::DEFAULT_MAX_CONCEPTS_PER_CHAPTER,
            theme_min_concepts: defaults::DEFAULT_THEME_MIN_CONCEPTS,
            min_shared_chapters: defaults::DEFAULT_MIN_SHARED_CHAPTERS,
            categories: ThematicCategory::builtin(),
            tension_pairs: default_tension_pairs(),
        }
    }
}

/// Dialectic pole pairs the original corpus repeatedly sets against each
/// other. Overridable per deployment.
pub fn default_tension_pairs() -> Vec<(String, String)> {
    [
        ("action", "contemplation"),
        ("individual", "collective"),
        ("technology", "nature"),
        ("simplicity", "complexity"),
        ("tradition", "innovation"),
        ("reason", "intuition"),
        ("science", "spirituality"),
        ("local", "global"),
        ("urgency", "patience"),
        ("personal", "systemic"),
    ]
    .into_iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect()
}
