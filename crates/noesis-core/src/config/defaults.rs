//! Named default values for every config section.

pub const DEFAULT_BASE_URL: &str = "books/";
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";
pub const DEFAULT_MAX_CONCURRENT_LOADS: usize = 3;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_RETRIES: u32 = 2;

pub const DEFAULT_MIN_TERM_FREQUENCY: usize = 2;
pub const DEFAULT_MAX_CONCEPTS_PER_CHAPTER: usize = 30;
pub const DEFAULT_THEME_MIN_CONCEPTS: usize = 5;
pub const DEFAULT_MIN_SHARED_CHAPTERS: usize = 2;

pub const DEFAULT_MEDITATION_PASSES: usize = 5;
pub const DEFAULT_MIN_THREAD_BOOKS: usize = 3;
pub const DEFAULT_MIN_SHARED_CONCEPTS: usize = 5;
pub const DEFAULT_MAX_CROSS_BOOK_CONNECTIONS: usize = 50;

pub const DEFAULT_SYNTHESIS_CHAPTERS: usize = 21;
pub const DEFAULT_PRACTICE_COUNT: usize = 21;
pub const DEFAULT_PRACTICES_PER_CATEGORY: usize = 3;
pub const DEFAULT_BOOK_TITLE: &str = "The Living Corpus: An Evolutionary Synthesis";
pub const DEFAULT_BOOK_SUBTITLE: &str = "Knowledge distilled from the full collection";

pub const DEFAULT_MAX_HISTORY: usize = 20;
pub const DEFAULT_DIALOGUE_SEARCH_LIMIT: usize = 5;
pub const DEFAULT_DIALOGUE_MAX_EXERCISES: usize = 3;
pub const DEFAULT_DIALOGUE_MAX_INSIGHTS: usize = 3;

pub const DEFAULT_SNAPSHOT_PATH: &str = "noesis-state.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";
