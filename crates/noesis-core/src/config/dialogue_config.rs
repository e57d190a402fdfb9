use serde::{Deserialize, Serialize};

use super::defaults;

/// Dialogue engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Turns retained in history before pruning oldest-first.
    pub max_history: usize,
    /// Corpus search hits gathered per question.
    pub search_limit: usize,
    /// Exercises surfaced per answer.
    pub max_exercises: usize,
    /// Meditation insights surfaced per answer.
    pub max_insights: usize,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_history: defaults::DEFAULT_MAX_HISTORY,
            search_limit: defaults::DEFAULT_DIALOGUE_SEARCH_LIMIT,
            max_exercises: defaults::DEFAULT_DIALOGUE_MAX_EXERCISES,
            max_insights: defaults::DEFAULT_DIALOGUE_MAX_INSIGHTS,
        }
    }
}
