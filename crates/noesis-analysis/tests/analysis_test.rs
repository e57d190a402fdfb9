//! End-to-end analysis over a small synthetic corpus.

use std::sync::Mutex;

use noesis_analysis::ConceptAnalyzer;
use noesis_core::config::AnalysisConfig;
use noesis_core::models::{Book, Chapter, Phase, PhaseStatus, Section};
use noesis_core::traits::ProgressSink;
use noesis_core::CancelToken;
use noesis_ingest::CorpusIndex;

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

fn chapter(id: &str, content: &str) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: id.to_string(),
        epigraph: None,
        content: content.to_string(),
        closing_question: None,
        exercises: vec![],
    }
}

fn corpus() -> CorpusIndex {
    let mut index = CorpusIndex::new();
    index.index_book(Book {
        id: "practice".into(),
        title: "Practice".into(),
        subtitle: None,
        author: None,
        sections: vec![Section {
            id: "s1".into(),
            title: "S".into(),
            subtitle: None,
            chapters: vec![
                chapter(
                    "c1",
                    "Meditation deepens attention. Meditation and attention grow together \
                     through patient action, and action follows attention.",
                ),
                chapter(
                    "c2",
                    "Attention attention meditation meditation action action. \
                     Contemplation contemplation balances action here.",
                ),
            ],
        }],
    });
    index
}

#[test]
fn analysis_extracts_concepts_with_provenance() {
    let analyzer = ConceptAnalyzer::new(AnalysisConfig::default());
    let report = analyzer
        .analyze(&corpus(), &RecordingSink::default(), &CancelToken::new())
        .unwrap();

    assert!(report.concepts.contains_key("meditation"));
    assert!(report.concepts.contains_key("attention"));
    assert!(report.missing_provenance().is_empty());

    // meditation and attention co-occur in both chapters.
    assert!(report
        .connections
        .iter()
        .any(|c| (c.source == "attention" && c.target == "meditation")
            || (c.source == "meditation" && c.target == "attention")));

    // action and contemplation share chapter c2.
    let tension = report
        .tensions
        .iter()
        .find(|t| t.pole_a == "action" && t.pole_b == "contemplation")
        .unwrap();
    assert!(tension.is_paradox);
}

#[test]
fn analysis_is_deterministic() {
    let index = corpus();
    let run = || {
        let analyzer = ConceptAnalyzer::new(AnalysisConfig::default());
        let report = analyzer
            .analyze(&index, &RecordingSink::default(), &CancelToken::new())
            .unwrap();
        serde_json::to_string(&report).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn progress_hits_milestones_monotonically() {
    let analyzer = ConceptAnalyzer::new(AnalysisConfig::default());
    let sink = RecordingSink::default();
    analyzer
        .analyze(&corpus(), &sink, &CancelToken::new())
        .unwrap();

    let percents = sink.percents.lock().unwrap();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{percents:?}");
    for milestone in [60, 80, 95, 100] {
        assert!(percents.contains(&milestone), "missing {milestone}");
    }
}

#[test]
fn cancel_aborts_analysis() {
    let analyzer = ConceptAnalyzer::new(AnalysisConfig::default());
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = analyzer
        .analyze(&corpus(), &RecordingSink::default(), &cancel)
        .unwrap_err();
    assert!(err.to_string().contains("cancelled"));
}

#[test]
fn empty_corpus_yields_empty_report() {
    let analyzer = ConceptAnalyzer::new(AnalysisConfig::default());
    let sink = RecordingSink::default();
    let report = analyzer
        .analyze(&CorpusIndex::new(), &sink, &CancelToken::new())
        .unwrap();
    assert!(report.is_empty());
    assert!(report.themes.is_empty());
    assert_eq!(*sink.percents.lock().unwrap().last().unwrap(), 100);
}
