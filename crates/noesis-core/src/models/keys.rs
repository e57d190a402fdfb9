//! Deterministic identity keys for chapters and exercises.
//!
//! A chapter key is `book:section:chapter`, globally unique across the
//! corpus because book ids are unique in the catalog and section/chapter
//! ids are unique within their parent. An exercise key extends the
//! chapter key with the exercise id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique chapter identity, derived from the owning book and
/// section. Ordered lexicographically, which the analyzer relies on for
/// deterministic iteration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterKey(String);

impl ChapterKey {
    pub fn derive(book_id: &str, section_id: &str, chapter_id: &str) -> Self {
        Self(format!("{book_id}:{section_id}:{chapter_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The book id component.
    pub fn book_id(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Globally unique exercise identity; extends the chapter key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseKey(String);

impl ExerciseKey {
    pub fn derive(chapter: &ChapterKey, exercise_id: &str) -> Self {
        Self(format!("{}:{exercise_id}", chapter.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn book_id(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }
}

impl fmt::Display for ExerciseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
