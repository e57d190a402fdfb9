use serde::{Deserialize, Serialize};

/// Per-book counters, computed while indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    pub chapters: usize,
    pub exercises: usize,
    pub words: usize,
}

/// Corpus-wide counters. Invariant: totals equal the sum of the
/// per-book stats of every successfully loaded book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub books_loaded: usize,
    pub total_words: usize,
    pub total_chapters: usize,
    pub total_exercises: usize,
}

/// What `ingest_all` reports back to the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    pub total_books: usize,
    pub loaded_books: usize,
    /// Ids that failed to load and were skipped with a warning.
    pub skipped: Vec<String>,
    pub stats: CorpusStats,
}
