//! # noesis-synthesis
//!
//! Generates the synthesized derivative book from the analyzed corpus
//! and accumulated insights, then exports it as JSON or Markdown.

pub mod export;
pub mod generator;
pub mod glossary;
pub mod practices;
pub mod structure;

pub use export::export_book;
pub use generator::SynthesisGenerator;
