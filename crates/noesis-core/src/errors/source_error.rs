/// Corpus source errors.
///
/// Only catalog failures are fatal to ingestion; per-book failures are
/// demoted to warnings by the loader and the book is skipped.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("catalog malformed: {reason}")]
    CatalogMalformed { reason: String },

    #[error("book '{id}' fetch failed: {reason}")]
    BookFetchFailed { id: String, reason: String },

    #[error("book '{id}' malformed: {reason}")]
    BookMalformed { id: String, reason: String },

    #[error("fetch timed out after {attempts} attempts: {resource}")]
    FetchTimeout { resource: String, attempts: u32 },
}
