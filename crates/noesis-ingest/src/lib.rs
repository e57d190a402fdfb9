//! # noesis-ingest
//!
//! Corpus ingestion: fetching the catalog and books from a source,
//! building the in-memory corpus index, and searching it.

pub mod index;
pub mod loader;
pub mod search;
pub mod source;

pub use index::{CorpusIndex, IndexedChapter, IndexedExercise};
pub use loader::CorpusLoader;
pub use search::{search_corpus, SearchHit};
pub use source::{FsSource, HttpSource, MemorySource};
