//! Frequency-based concept extraction.
//!
//! Chapters are scanned in parallel but merged in chapter-key order, so
//! the resulting concept map is identical run to run.

use std::collections::HashMap;
use std::sync::OnceLock;

use noesis_core::config::AnalysisConfig;
use noesis_core::models::{ChapterKey, Concept, Occurrence};
use noesis_ingest::CorpusIndex;
use rayon::prelude::*;
use regex::Regex;

use crate::stopwords::is_stopword;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Words of four letters or more; shorter words carry no signal.
    PATTERN.get_or_init(|| Regex::new(r"[a-zà-öø-ÿ]{4,}").unwrap_or_else(|_| unreachable!()))
}

/// Candidate terms of one chapter: (term, frequency), ordered by
/// descending frequency then term, truncated to the configured cap.
pub fn chapter_terms(text: &str, config: &AnalysisConfig) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in word_pattern().find_iter(&lowered) {
        let word = m.as_str();
        if is_stopword(word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut terms: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(_, freq)| *freq >= config.min_term_frequency)
        .map(|(term, freq)| (term.to_string(), freq))
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(config.max_concepts_per_chapter);
    terms
}

/// Extract the corpus-wide concept map. Every concept carries at least
/// one occurrence by construction.
pub fn extract_concepts(
    index: &CorpusIndex,
    config: &AnalysisConfig,
    mut on_chapter: impl FnMut(usize, usize),
) -> HashMap<String, Concept> {
    let chapters = index.chapters_sorted();
    let total = chapters.len();

    let per_chapter: Vec<(ChapterKey, String, Vec<(String, usize)>)> = chapters
        .par_iter()
        .filter_map(|chapter| {
            let text = index.full_text(&chapter.key)?;
            Some((
                chapter.key.clone(),
                chapter.book_id.clone(),
                chapter_terms(text, config),
            ))
        })
        .collect();

    let mut concepts: HashMap<String, Concept> = HashMap::new();
    for (done, (key, book_id, terms)) in per_chapter.into_iter().enumerate() {
        for (term, frequency) in terms {
            let concept = concepts
                .entry(term.clone())
                .or_insert_with(|| Concept::new(term));
            concept.occurrences.push(Occurrence {
                chapter: key.clone(),
                book_id: book_id.clone(),
                frequency,
            });
        }
        on_chapter(done + 1, total);
    }
    concepts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn short_words_and_stopwords_are_ignored() {
        let text = "the owl owl because because because attention attention";
        let terms = chapter_terms(text, &config());
        let term_names: Vec<&str> = terms.iter().map(|(t, _)| t.as_str()).collect();
        assert!(!term_names.contains(&"owl"), "3-letter word kept");
        assert!(!term_names.contains(&"because"), "stopword kept");
        assert!(term_names.contains(&"attention"));
    }

    #[test]
    fn singletons_fall_below_frequency_threshold() {
        let text = "unique appears once but attention attention twice";
        let terms = chapter_terms(text, &config());
        assert_eq!(terms, vec![("attention".to_string(), 2)]);
    }

    #[test]
    fn terms_order_by_frequency_then_alphabetically() {
        let text = "zebra zebra apple apple mango mango mango";
        let terms = chapter_terms(text, &config());
        assert_eq!(
            terms,
            vec![
                ("mango".to_string(), 3),
                ("apple".to_string(), 2),
                ("zebra".to_string(), 2),
            ]
        );
    }

    #[test]
    fn per_chapter_cap_is_enforced() {
        let mut text = String::new();
        for a in 'a'..='z' {
            for b in ['x', 'y'] {
                let word = format!("concept{a}{b}");
                text.push_str(&format!("{word} {word} "));
            }
        }
        let terms = chapter_terms(&text, &config());
        assert_eq!(terms.len(), config().max_concepts_per_chapter);
    }
}
