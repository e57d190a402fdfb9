//! Filesystem corpus source: a directory with `catalog.json` and one
//! `<book-id>.json` per book.

use std::path::PathBuf;

use noesis_core::errors::SourceError;
use noesis_core::models::{Book, Catalog};
use noesis_core::traits::CorpusSource;
use tracing::debug;

pub struct FsSource {
    root: PathBuf,
    catalog_file: String,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>, catalog_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            catalog_file: catalog_file.into(),
        }
    }
}

impl CorpusSource for FsSource {
    fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        let path = self.root.join(&self.catalog_file);
        debug!(path = %path.display(), "reading catalog");
        let body =
            std::fs::read_to_string(&path).map_err(|e| SourceError::CatalogUnavailable {
                reason: format!("{}: {e}", path.display()),
            })?;
        serde_json::from_str(&body).map_err(|e| SourceError::CatalogMalformed {
            reason: e.to_string(),
        })
    }

    fn fetch_book(&self, book_id: &str) -> Result<Option<Book>, SourceError> {
        let path = self.root.join(format!("{book_id}.json"));
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SourceError::BookFetchFailed {
                    id: book_id.to_string(),
                    reason: e.to_string(),
                })
            }
        };
        let mut book: Book =
            serde_json::from_str(&body).map_err(|e| SourceError::BookMalformed {
                id: book_id.to_string(),
                reason: e.to_string(),
            })?;
        book.id = book_id.to_string();
        Ok(Some(book))
    }
}
