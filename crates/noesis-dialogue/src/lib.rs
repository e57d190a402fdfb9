//! # noesis-dialogue
//!
//! Answers questions about the corpus, grounded in retrieved chapter
//! fragments and accumulated insights. The engine is stateless; the
//! pipeline coordinator owns the conversation history.

pub mod context;
pub mod engine;

pub use engine::{suggested_questions, DialogueEngine};
