//! # noesis-analysis
//!
//! Turns an ingested corpus into an [`AnalysisReport`]: extracted
//! concepts with provenance, thematic groupings, cross-chapter
//! connections, and dialectic tensions.
//!
//! [`AnalysisReport`]: noesis_core::models::AnalysisReport

pub mod analyzer;
pub mod extraction;
pub mod graph;
pub mod stopwords;
pub mod tensions;
pub mod themes;

pub use analyzer::ConceptAnalyzer;
