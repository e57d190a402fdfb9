//! The Section → Chapter → Exercise tree owned by each book.

use serde::{Deserialize, Serialize};

/// A full book document as fetched from the corpus source.
///
/// `id` is assigned by the loader from the requested catalog id, not
/// trusted from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A chapter: free text content plus an optional closing question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub epigraph: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub closing_question: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// An exercise: description plus an ordered list of steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

/// Whitespace-delimited word count, the unit used by all corpus stats.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
