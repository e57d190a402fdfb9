//! Dialogue turns and grounded answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::keys::ChapterKey;

/// A pointer into the corpus that grounds part of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub chapter: ChapterKey,
    pub book_id: String,
    pub title: String,
}

/// How the engine interprets a question; tunes answer composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMode {
    Default,
    Exploration,
    Synthesis,
    Practice,
}

/// An answer plus everything it was grounded in. Unless the corpus is
/// fully empty, `references` is non-empty or the answer says explicitly
/// that nothing relevant was found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub text: String,
    pub mode: QuestionMode,
    pub references: Vec<Reference>,
    pub suggested_practices: Vec<String>,
    pub follow_up_questions: Vec<String>,
    /// Count of retrieved context fragments the answer drew on.
    pub context_fragments: usize,
}

/// One question/answer exchange. Append-only; cleared only in bulk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub id: uuid::Uuid,
    pub question: String,
    pub answer: String,
    pub references: Vec<Reference>,
    pub asked_at: DateTime<Utc>,
}
