use std::collections::HashSet;
use std::sync::Mutex;

use noesis_core::config::MeditationConfig;
use noesis_core::models::{
    AnalysisReport, Book, Chapter, ChapterKey, Concept, InsightKind, Occurrence, Phase,
    PhaseStatus, Section, Tension, Theme,
};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;
use noesis_meditation::MeditationEngine;

#[derive(Default)]
struct RecordingSink {
    percents: Mutex<Vec<u8>>,
}

impl ProgressSink for RecordingSink {
    fn progress(&self, _phase: Phase, percent: u8, _label: &str) {
        if let Ok(mut p) = self.percents.lock() {
            p.push(percent);
        }
    }
    fn phase_status(&self, _phase: Phase, _status: PhaseStatus) {}
}

fn corpus() -> CorpusIndex {
    let mut index = CorpusIndex::new();
    for id in ["first", "second", "third"] {
        index.index_book(Book {
            id: id.to_string(),
            title: format!("The {id} book"),
            subtitle: None,
            author: None,
            sections: vec![Section {
                id: "s1".into(),
                title: "S".into(),
                subtitle: None,
                chapters: vec![Chapter {
                    id: "c1".into(),
                    title: "C".into(),
                    epigraph: None,
                    content: "attention attention practice practice".into(),
                    closing_question: None,
                    exercises: vec![],
                }],
            }],
        });
    }
    index
}

fn report() -> AnalysisReport {
    let mut report = AnalysisReport::default();
    for term in ["attention", "practice"] {
        let mut concept = Concept::new(term);
        for book in ["first", "second", "third"] {
            concept.occurrences.push(Occurrence {
                chapter: ChapterKey::derive(book, "s1", "c1"),
                book_id: book.to_string(),
                frequency: 2,
            });
        }
        report.concepts.insert(term.to_string(), concept);
    }
    report.themes.push(Theme {
        id: "awareness".into(),
        name: "Awareness and Awakening".into(),
        concept_count: 2,
        top_terms: vec!["attention".into(), "practice".into()],
        keywords: vec!["attention".into()],
    });
    report.tensions.push(Tension {
        pole_a: "action".into(),
        pole_b: "contemplation".into(),
        shared_chapters: vec![],
        synthesis: "Each book leans one way.".into(),
        is_paradox: false,
    });
    report
}

fn config(passes: usize) -> MeditationConfig {
    MeditationConfig {
        passes,
        min_thread_books: 3,
        min_shared_concepts: 2,
        ..Default::default()
    }
}

#[test]
fn runs_exactly_the_configured_number_of_passes() {
    let engine = MeditationEngine::new(config(5));
    let history = engine
        .meditate(
            &corpus(),
            &report(),
            &RecordingSink::default(),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(history.passes.len(), 5);
    let kinds: Vec<InsightKind> = history.passes.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::Comprehension,
            InsightKind::Connection,
            InsightKind::Deepening,
            InsightKind::Integration,
            InsightKind::Transcendence,
        ]
    );
    assert!(history.total_insights() > 0);
}

#[test]
fn pass_kinds_cycle_past_five() {
    let engine = MeditationEngine::new(config(7));
    let history = engine
        .meditate(
            &corpus(),
            &report(),
            &RecordingSink::default(),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(history.passes.len(), 7);
    assert_eq!(history.passes[5].kind, InsightKind::Comprehension);
    assert_eq!(history.passes[6].kind, InsightKind::Connection);
}

#[test]
fn repeated_pass_kinds_rediscover_nothing() {
    let engine = MeditationEngine::new(config(10));
    let history = engine
        .meditate(
            &corpus(),
            &report(),
            &RecordingSink::default(),
            &CancelToken::new(),
        )
        .unwrap();

    // Passes 6..=10 repeat kinds 1..=5 on unchanged inputs.
    for pass in &history.passes[5..] {
        assert!(
            pass.insights.is_empty(),
            "pass {} rediscovered {} insights",
            pass.number,
            pass.insights.len()
        );
    }
}

#[test]
fn accumulated_insights_are_unique_by_content() {
    let engine = MeditationEngine::new(config(5));
    let history = engine
        .meditate(
            &corpus(),
            &report(),
            &RecordingSink::default(),
            &CancelToken::new(),
        )
        .unwrap();

    let hashes: HashSet<&str> = history
        .insights
        .iter()
        .map(|i| i.content_hash.as_str())
        .collect();
    assert_eq!(hashes.len(), history.total_insights());
}

#[test]
fn comprehension_names_every_book() {
    let engine = MeditationEngine::new(config(1));
    let history = engine
        .meditate(
            &corpus(),
            &report(),
            &RecordingSink::default(),
            &CancelToken::new(),
        )
        .unwrap();

    let sources: Vec<&str> = history.passes[0]
        .insights
        .iter()
        .map(|i| i.source.as_str())
        .collect();
    assert_eq!(sources, vec!["first", "second", "third"]);
}

#[test]
fn progress_ends_at_exactly_100() {
    let engine = MeditationEngine::new(config(3));
    let sink = RecordingSink::default();
    engine
        .meditate(&corpus(), &report(), &sink, &CancelToken::new())
        .unwrap();
    let percents = sink.percents.lock().unwrap();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*percents.last().unwrap(), 100);
}

#[test]
fn cancel_aborts_meditation() {
    let engine = MeditationEngine::new(config(5));
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = engine
        .meditate(&corpus(), &report(), &RecordingSink::default(), &cancel)
        .unwrap_err();
    assert!(err.to_string().contains("cancelled"));
}
