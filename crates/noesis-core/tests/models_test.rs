use chrono::Utc;
use noesis_core::models::*;

fn occurrence(book: &str, section: &str, chapter: &str) -> Occurrence {
    Occurrence {
        chapter: ChapterKey::derive(book, section, chapter),
        book_id: book.to_string(),
        frequency: 2,
    }
}

#[test]
fn concept_tracks_distinct_chapters() {
    let mut concept = Concept::new("presence");
    concept.occurrences.push(occurrence("a", "s1", "c1"));
    concept.occurrences.push(occurrence("a", "s1", "c1"));
    concept.occurrences.push(occurrence("b", "s1", "c1"));
    assert_eq!(concept.occurrence_count(), 3);
    assert_eq!(concept.chapters().len(), 2);
}

#[test]
fn top_concepts_orders_by_count_then_term() {
    let mut report = AnalysisReport::default();
    for (term, n) in [("beta", 2), ("alpha", 2), ("gamma", 5)] {
        let mut c = Concept::new(term);
        for i in 0..n {
            c.occurrences.push(occurrence("bk", "s", &format!("c{i}")));
        }
        report.concepts.insert(term.to_string(), c);
    }
    let top: Vec<&str> = report
        .top_concepts(10)
        .iter()
        .map(|c| c.term.as_str())
        .collect();
    assert_eq!(top, vec!["gamma", "alpha", "beta"]);
}

#[test]
fn every_concept_needs_provenance() {
    let mut report = AnalysisReport::default();
    report
        .concepts
        .insert("orphan".into(), Concept::new("orphan"));
    assert_eq!(report.missing_provenance(), vec!["orphan"]);
}

#[test]
fn insight_kind_cycles_past_five_passes() {
    assert_eq!(InsightKind::for_pass(1), InsightKind::Comprehension);
    assert_eq!(InsightKind::for_pass(5), InsightKind::Transcendence);
    assert_eq!(InsightKind::for_pass(6), InsightKind::Comprehension);
    assert_eq!(InsightKind::for_pass(12), InsightKind::Connection);
}

#[test]
fn identical_insight_content_hashes_identically() {
    let a = Insight::new(InsightKind::Comprehension, "book-a", "the same text", 1);
    let b = Insight::new(InsightKind::Connection, "book-b", "the same text", 3);
    assert_eq!(a.content_hash, b.content_hash);
    let c = Insight::new(InsightKind::Comprehension, "book-a", "different text", 1);
    assert_ne!(a.content_hash, c.content_hash);
}

#[test]
fn meditation_history_finds_insights_by_query_word() {
    let mut history = MeditationHistory::default();
    history.insights.push(Insight::new(
        InsightKind::Connection,
        "theme:ecology",
        "Attention and ecology reinforce each other",
        2,
    ));
    history.insights.push(Insight::new(
        InsightKind::Comprehension,
        "book-a",
        "Simplicity is a discipline",
        1,
    ));
    let hits = history.insights_matching("ecology practice", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].source, "theme:ecology");
}

#[test]
fn synthesized_book_full_text_includes_every_chapter() {
    let book = SynthesizedBook {
        title: "T".into(),
        subtitle: "S".into(),
        generated_at: Utc::now(),
        source_books: 2,
        chapters: vec![
            SynthChapter {
                id: "prologue".into(),
                part: "Prologue".into(),
                title: "Opening".into(),
                epigraph: None,
                body: "first body".into(),
                closing_question: None,
                source_theme: None,
            },
            SynthChapter {
                id: "ch-1".into(),
                part: "Part I".into(),
                title: "Awakening".into(),
                epigraph: None,
                body: "second body".into(),
                closing_question: None,
                source_theme: Some("awareness".into()),
            },
        ],
        practices: vec![],
        glossary: vec![],
    };
    let text = book.full_text();
    assert!(text.contains("first body"));
    assert!(text.contains("second body"));
    assert_eq!(book.chapter_count(), 2);
}
