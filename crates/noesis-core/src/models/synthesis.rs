//! The pipeline's terminal artifact: the synthesized derivative book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::keys::ExerciseKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epigraph {
    pub text: String,
    pub author: String,
}

/// One generated chapter of the synthesized book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthChapter {
    pub id: String,
    /// The part this chapter belongs to ("Prologue", "Part I", ...).
    pub part: String,
    pub title: String,
    #[serde(default)]
    pub epigraph: Option<Epigraph>,
    pub body: String,
    #[serde(default)]
    pub closing_question: Option<String>,
    /// Theme id the chapter was generated from, when applicable.
    #[serde(default)]
    pub source_theme: Option<String>,
}

/// A practice distilled from the corpus exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Practice {
    pub number: usize,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub reflection: Option<String>,
    /// Book the practice was distilled from; "synthesis" for padding
    /// practices generated when the corpus is thin.
    pub source_book: String,
    #[serde(default)]
    pub source_exercise: Option<ExerciseKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    pub occurrences: usize,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

/// The synthesized derivative document. Regenerated wholesale on every
/// synthesis run; never partially merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizedBook {
    pub title: String,
    pub subtitle: String,
    pub generated_at: DateTime<Utc>,
    /// Number of source books that fed this synthesis.
    pub source_books: usize,
    pub chapters: Vec<SynthChapter>,
    pub practices: Vec<Practice>,
    pub glossary: Vec<GlossaryEntry>,
}

impl SynthesizedBook {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Concatenated searchable text of the synthesized book.
    pub fn full_text(&self) -> String {
        self.chapters
            .iter()
            .map(|c| format!("{}\n{}", c.title, c.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Supported export formats. Rendering (HTML and beyond) is out of
/// scope; these cover archival and downstream tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub content: String,
    pub filename: String,
}
