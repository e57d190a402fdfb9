use crate::errors::SourceError;
use crate::models::{Book, Catalog};

/// Where books come from. Implementations exist for HTTP, the local
/// filesystem, and in-memory fixtures.
pub trait CorpusSource: Send + Sync {
    /// Fetch the catalog listing every available book.
    fn fetch_catalog(&self) -> Result<Catalog, SourceError>;

    /// Fetch one book by id. `Ok(None)` means the source does not have
    /// the book; the caller decides whether that is fatal.
    fn fetch_book(&self, book_id: &str) -> Result<Option<Book>, SourceError>;
}
