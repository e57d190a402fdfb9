use serde::{Deserialize, Serialize};

/// One entry of the catalog manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDescriptor {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// The top-level manifest of all books available to the pipeline.
/// Loaded once; immutable for the pipeline's lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub books: Vec<BookDescriptor>,
}

impl Catalog {
    /// Book ids in catalog order.
    pub fn book_ids(&self) -> Vec<String> {
        self.books.iter().map(|b| b.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
