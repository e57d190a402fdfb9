//! Comprehension: one insight per book, grasping what the book is
//! about in terms of its dominant concepts.

use std::collections::HashMap;

use noesis_core::models::{AnalysisReport, Insight, InsightKind};
use noesis_ingest::CorpusIndex;

/// How many dominant concepts to name per book.
const TOP_TERMS_PER_BOOK: usize = 5;

pub fn comprehend(
    index: &CorpusIndex,
    report: &AnalysisReport,
    pass_number: usize,
) -> Vec<Insight> {
    // Aggregate concept weight per book from occurrence provenance.
    let mut per_book: HashMap<&str, Vec<(&str, usize)>> = HashMap::new();
    for concept in report.concepts.values() {
        let mut weight_by_book: HashMap<&str, usize> = HashMap::new();
        for occurrence in &concept.occurrences {
            *weight_by_book.entry(occurrence.book_id.as_str()).or_insert(0) +=
                occurrence.frequency;
        }
        for (book, weight) in weight_by_book {
            per_book.entry(book).or_default().push((&concept.term, weight));
        }
    }

    let mut insights = Vec::new();
    for book_id in index.book_ids() {
        let Some(book) = index.book(book_id) else {
            continue;
        };
        let Some(stats) = index.book_stats(book_id) else {
            continue;
        };
        let mut terms = per_book.remove(book_id.as_str()).unwrap_or_default();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let dominant: Vec<&str> = terms
            .iter()
            .take(TOP_TERMS_PER_BOOK)
            .map(|(t, _)| *t)
            .collect();

        let content = if dominant.is_empty() {
            format!(
                "\"{}\" spans {} chapters and {} words; its vocabulary is too diffuse for dominant concepts to surface.",
                book.title, stats.chapters, stats.words
            )
        } else {
            format!(
                "\"{}\" moves through {} chapters around {}.",
                book.title,
                stats.chapters,
                dominant.join(", ")
            )
        };
        insights.push(Insight::new(
            InsightKind::Comprehension,
            book_id.clone(),
            content,
            pass_number,
        ));
    }
    insights
}
