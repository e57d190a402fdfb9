use serde::{Deserialize, Serialize};

use super::defaults;

/// Meditation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeditationConfig {
    /// Number of passes to run. Every configured pass always runs, even
    /// when a pass yields zero new insights.
    pub passes: usize,
    /// Books a thematic thread must span before it yields an insight.
    pub min_thread_books: usize,
    /// Shared concepts two books need before they count as connected.
    pub min_shared_concepts: usize,
    /// Cross-book connections retained per connection pass.
    pub max_cross_book_connections: usize,
}

impl Default for MeditationConfig {
    fn default() -> Self {
        Self {
            passes: defaults::DEFAULT_MEDITATION_PASSES,
            min_thread_books: defaults::DEFAULT_MIN_THREAD_BOOKS,
            min_shared_concepts: defaults::DEFAULT_MIN_SHARED_CONCEPTS,
            max_cross_book_connections: defaults::DEFAULT_MAX_CROSS_BOOK_CONNECTIONS,
        }
    }
}
