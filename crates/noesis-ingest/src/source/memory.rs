//! In-memory corpus source, used by tests and embedders.

use std::collections::HashMap;
use std::sync::Mutex;

use noesis_core::errors::SourceError;
use noesis_core::models::{Book, BookDescriptor, Catalog};
use noesis_core::traits::CorpusSource;

#[derive(Default)]
pub struct MemorySource {
    catalog: Catalog,
    books: HashMap<String, Book>,
    /// Book ids that fail on fetch, for error-path testing.
    failing: Vec<String>,
    fetch_log: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, mut book: Book) -> Self {
        self.catalog.books.push(BookDescriptor {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: book.subtitle.clone(),
            author: book.author.clone(),
        });
        let id = book.id.clone();
        book.id = id.clone();
        self.books.insert(id, book);
        self
    }

    /// Register a catalog entry whose fetch always fails.
    pub fn with_failing_book(mut self, id: &str) -> Self {
        self.catalog.books.push(BookDescriptor {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: None,
            author: None,
        });
        self.failing.push(id.to_string());
        self
    }

    /// Ids fetched so far, in request order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetch_log.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl CorpusSource for MemorySource {
    fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        Ok(self.catalog.clone())
    }

    fn fetch_book(&self, book_id: &str) -> Result<Option<Book>, SourceError> {
        if let Ok(mut log) = self.fetch_log.lock() {
            log.push(book_id.to_string());
        }
        if self.failing.iter().any(|id| id == book_id) {
            return Err(SourceError::BookFetchFailed {
                id: book_id.to_string(),
                reason: "simulated failure".to_string(),
            });
        }
        Ok(self.books.get(book_id).cloned())
    }
}
