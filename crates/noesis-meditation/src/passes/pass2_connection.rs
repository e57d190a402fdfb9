//! Connection: threads that run across books, and the book pairs most
//! strongly bound by shared vocabulary.

use std::collections::{BTreeMap, BTreeSet};

use noesis_core::config::MeditationConfig;
use noesis_core::models::{AnalysisReport, Insight, InsightKind};

pub fn connect(
    report: &AnalysisReport,
    config: &MeditationConfig,
    pass_number: usize,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Concept -> books it appears in, deterministic order throughout.
    let mut books_by_term: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for concept in report.concepts.values() {
        let books = books_by_term.entry(&concept.term).or_default();
        for occurrence in &concept.occurrences {
            books.insert(&occurrence.book_id);
        }
    }

    // Threads: one concept woven through several books.
    for (term, books) in &books_by_term {
        if books.len() < config.min_thread_books {
            continue;
        }
        let book_list: Vec<&str> = books.iter().copied().collect();
        insights.push(Insight::new(
            InsightKind::Connection,
            format!("thread:{term}"),
            format!(
                "\"{term}\" threads through {} books ({}); none of them owns it alone.",
                books.len(),
                book_list.join(", ")
            ),
            pass_number,
        ));
    }

    // Book pairs bound by shared concepts.
    let mut shared: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for books in books_by_term.values() {
        let list: Vec<&str> = books.iter().copied().collect();
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                *shared.entry((a, b)).or_insert(0) += 1;
            }
        }
    }
    let mut pairs: Vec<((&str, &str), usize)> = shared
        .into_iter()
        .filter(|(_, n)| *n >= config.min_shared_concepts)
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(config.max_cross_book_connections);

    for ((a, b), n) in pairs {
        insights.push(Insight::new(
            InsightKind::Connection,
            format!("bridge:{a}+{b}"),
            format!("{a} and {b} share {n} concepts; read together they form one argument."),
            pass_number,
        ));
    }

    insights
}
