//! Full-pipeline synthesis: ingest -> analyze -> meditate -> generate.

use std::sync::Mutex;

use noesis_analysis::ConceptAnalyzer;
use noesis_core::config::{AnalysisConfig, MeditationConfig, SynthesisConfig};
use noesis_core::models::{
    Book, Chapter, Exercise, ExportFormat, Phase, PhaseStatus, Section,
};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;
use noesis_meditation::MeditationEngine;
use noesis_synthesis::{export_book, SynthesisGenerator};

#[derive(Default)]
struct SilentSink {
    last: Mutex<u8>,
}

impl ProgressSink for SilentSink {
    fn progress(&self, _phase: Phase, percent: u8, _label: &str) {
        if let Ok(mut last) = self.last.lock() {
            *last = percent;
        }
    }
    fn phase_status(&self, _phase: Phase, _status: PhaseStatus) {}
}

const TERMS: &[&str] = &[
    "meditation",
    "attention",
    "presence",
    "ecology",
    "nature",
    "earth",
    "community",
    "love",
    "empathy",
    "creativity",
    "simplicity",
    "action",
    "transformation",
    "movement",
    "intelligence",
    "technology",
    "symbiosis",
    "wilderness",
    "belonging",
    "expression",
    "awakening",
    "interdependence",
    "commitment",
    "awareness",
];

fn corpus() -> CorpusIndex {
    // Every term appears twice in every chapter, so every term clears
    // the frequency threshold and every pair shares both chapters.
    let content: String = TERMS
        .iter()
        .map(|t| format!("{t} {t}"))
        .collect::<Vec<_>>()
        .join(" ");
    let mut index = CorpusIndex::new();
    index.index_book(Book {
        id: "seed".into(),
        title: "Seed Book".into(),
        subtitle: None,
        author: None,
        sections: vec![Section {
            id: "s1".into(),
            title: "S".into(),
            subtitle: None,
            chapters: vec![
                Chapter {
                    id: "c1".into(),
                    title: "One".into(),
                    epigraph: Some("Begin where you are.".into()),
                    content: content.clone(),
                    closing_question: None,
                    exercises: vec![Exercise {
                        id: "e1".into(),
                        title: "Notice the breath".into(),
                        duration: Some("5 minutes".into()),
                        description: "Observe the breath with full attention.".into(),
                        steps: vec!["Sit".into(), "Breathe".into()],
                        reflection: None,
                    }],
                },
                Chapter {
                    id: "c2".into(),
                    title: "Two".into(),
                    epigraph: None,
                    content,
                    closing_question: None,
                    exercises: vec![],
                },
            ],
        }],
    });
    index
}

fn synthesize(index: &CorpusIndex) -> noesis_core::models::SynthesizedBook {
    let sink = SilentSink::default();
    let cancel = CancelToken::new();
    let report = ConceptAnalyzer::new(AnalysisConfig::default())
        .analyze(index, &sink, &cancel)
        .unwrap();
    let history = MeditationEngine::new(MeditationConfig::default())
        .meditate(index, &report, &sink, &cancel)
        .unwrap();
    SynthesisGenerator::new(SynthesisConfig::default())
        .generate(index, &report, &history, &sink, &cancel)
        .unwrap()
}

#[test]
fn rich_corpus_fills_the_full_structure() {
    let book = synthesize(&corpus());

    assert_eq!(book.chapters[0].part, "Prologue");
    assert_eq!(book.chapters.len(), 22); // prologue + 21

    let count_in = |part: &str| book.chapters.iter().filter(|c| c.part == part).count();
    assert_eq!(count_in("Part I: Awakening"), 5);
    assert_eq!(count_in("Part II: Reconnection"), 5);
    assert_eq!(count_in("Part III: Action"), 5);
    assert_eq!(count_in("Part IV: Synthesis"), 6);

    assert_eq!(book.practices.len(), 21);
    assert!(book
        .practices
        .iter()
        .any(|p| p.source_book == "seed" && p.title == "Notice the breath"));
    assert!(!book.glossary.is_empty());
    // Glossary is alphabetical.
    let terms: Vec<&str> = book.glossary.iter().map(|e| e.term.as_str()).collect();
    let mut sorted = terms.clone();
    sorted.sort_unstable();
    assert_eq!(terms, sorted);
    assert_eq!(book.source_books, 1);
}

#[test]
fn empty_corpus_yields_a_minimal_book() {
    let book = synthesize(&CorpusIndex::new());
    assert!(book.chapters.is_empty());
    assert!(book.glossary.is_empty());
    assert_eq!(book.source_books, 0);
    // Practices are generated even without source exercises.
    assert_eq!(book.practices.len(), 21);
    assert!(book.practices.iter().all(|p| p.source_book == "synthesis"));
}

#[test]
fn regeneration_replaces_rather_than_merges() {
    let index = corpus();
    let first = synthesize(&index);
    let second = synthesize(&index);
    assert_eq!(first.chapters.len(), second.chapters.len());
    assert_eq!(first.practices.len(), second.practices.len());
}

#[test]
fn exports_render_both_formats() {
    let book = synthesize(&corpus());

    let json = export_book(&book, ExportFormat::Json).unwrap();
    let parsed: noesis_core::models::SynthesizedBook =
        serde_json::from_str(&json.content).unwrap();
    assert_eq!(parsed.chapters.len(), book.chapters.len());

    let md = export_book(&book, ExportFormat::Markdown).unwrap();
    assert!(md.content.contains("## Part I: Awakening"));
    assert!(md.content.contains("## Practices"));
    assert!(md.content.contains("## Glossary"));
}

#[test]
fn cancelled_synthesis_aborts() {
    let index = corpus();
    let sink = SilentSink::default();
    let cancel = CancelToken::new();
    let report = ConceptAnalyzer::new(AnalysisConfig::default())
        .analyze(&index, &sink, &cancel)
        .unwrap();
    let history = MeditationEngine::new(MeditationConfig::default())
        .meditate(&index, &report, &sink, &cancel)
        .unwrap();

    cancel.cancel();
    let err = SynthesisGenerator::new(SynthesisConfig::default())
        .generate(&index, &report, &history, &sink, &cancel)
        .unwrap_err();
    assert!(err.to_string().contains("cancelled"));
}
