//! Context retrieval: turn a free-form question into corpus fragments
//! that can ground an answer.

use noesis_analysis::stopwords::is_stopword;
use noesis_core::config::DialogueConfig;
use noesis_core::models::Reference;
use noesis_ingest::{search_corpus, CorpusIndex};

/// How many distinct keywords of a question are worth searching.
const MAX_KEYWORDS: usize = 5;

/// A retrieved fragment with its provenance.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub reference: Reference,
    pub text: String,
}

/// Meaning-bearing words of a question: four letters or more, not a
/// stopword, deduplicated in order of appearance.
pub fn question_keywords(question: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for raw in question.to_lowercase().split(|c: char| !c.is_alphabetic()) {
        if raw.len() < 4 || is_stopword(raw) {
            continue;
        }
        if !keywords.iter().any(|k| k == raw) {
            keywords.push(raw.to_string());
        }
    }
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Search each keyword and merge the hits, at most one fragment per
/// chapter, capped at the configured search limit.
pub fn retrieve_context(
    index: &CorpusIndex,
    question: &str,
    config: &DialogueConfig,
) -> Vec<Fragment> {
    let mut fragments: Vec<Fragment> = Vec::new();
    for keyword in question_keywords(question) {
        for hit in search_corpus(index, &keyword, config.search_limit) {
            if fragments.len() >= config.search_limit {
                return fragments;
            }
            if fragments.iter().any(|f| f.reference.chapter == hit.chapter) {
                continue;
            }
            fragments.push(Fragment {
                reference: Reference {
                    chapter: hit.chapter,
                    book_id: hit.book_id,
                    title: hit.chapter_title,
                },
                text: hit.context,
            });
        }
    }
    fragments
}
