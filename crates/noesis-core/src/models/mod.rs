//! Data model for the whole pipeline. Everything here is serde-serializable;
//! the mutable pipeline state itself is owned by the coordinator crate.

pub mod analysis;
pub mod book;
pub mod catalog;
pub mod concept;
pub mod dialogue;
pub mod insight;
pub mod keys;
pub mod phase;
pub mod snapshot;
pub mod stats;
pub mod synthesis;

pub use analysis::AnalysisReport;
pub use book::{word_count, Book, Chapter, Exercise, Section};
pub use catalog::{BookDescriptor, Catalog};
pub use concept::{Concept, Connection, Occurrence, RelationKind, Tension, ThematicCategory, Theme};
pub use dialogue::{DialogueTurn, GroundedAnswer, QuestionMode, Reference};
pub use insight::{Insight, InsightKind, MeditationHistory, MeditationPass};
pub use keys::{ChapterKey, ExerciseKey};
pub use phase::{Phase, PhaseProgress, PhaseStatus};
pub use snapshot::PipelineSnapshot;
pub use stats::{BookStats, CorpusStats, IngestSummary};
pub use synthesis::{
    Epigraph, ExportFormat, ExportedDocument, GlossaryEntry, Practice, SynthChapter,
    SynthesizedBook,
};
