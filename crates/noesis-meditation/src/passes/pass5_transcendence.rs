//! Transcendence: step back from the parts and name what the corpus is
//! as a whole.

use noesis_core::models::{AnalysisReport, Insight, InsightKind};
use noesis_ingest::CorpusIndex;

/// How many corpus-wide concepts the summary names.
const TOP_TERMS: usize = 7;

pub fn transcend(
    index: &CorpusIndex,
    report: &AnalysisReport,
    pass_number: usize,
) -> Vec<Insight> {
    let stats = index.stats();
    if stats.books_loaded == 0 {
        return Vec::new();
    }

    let top: Vec<&str> = report
        .top_concepts(TOP_TERMS)
        .iter()
        .map(|c| c.term.as_str())
        .collect();

    let mut insights = vec![Insight::new(
        InsightKind::Transcendence,
        "corpus",
        format!(
            "Across {} books, {} chapters, and {} words, one conversation keeps returning to {}.",
            stats.books_loaded,
            stats.total_chapters,
            stats.total_words,
            top.join(", ")
        ),
        pass_number,
    )];

    if !report.tensions.is_empty() {
        let paradoxes = report.tensions.iter().filter(|t| t.is_paradox).count();
        insights.push(Insight::new(
            InsightKind::Transcendence,
            "corpus:tensions",
            format!(
                "The corpus carries {} unresolved tensions, {} of them lived as paradox; its unity is not agreement but shared inquiry.",
                report.tensions.len(),
                paradoxes
            ),
            pass_number,
        ));
    }

    insights
}
