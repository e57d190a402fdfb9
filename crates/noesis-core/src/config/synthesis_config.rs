use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthesis generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Target chapter count, distributed across the four parts.
    pub chapters: usize,
    /// Target number of distilled practices.
    pub practices: usize,
    /// Practices drawn from each exercise category before padding.
    pub practices_per_category: usize,
    /// Title of the synthesized book.
    pub book_title: String,
    /// Subtitle of the synthesized book.
    pub book_subtitle: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            chapters: defaults::DEFAULT_SYNTHESIS_CHAPTERS,
            practices: defaults::DEFAULT_PRACTICE_COUNT,
            practices_per_category: defaults::DEFAULT_PRACTICES_PER_CATEGORY,
            book_title: defaults::DEFAULT_BOOK_TITLE.to_string(),
            book_subtitle: defaults::DEFAULT_BOOK_SUBTITLE.to_string(),
        }
    }
}
