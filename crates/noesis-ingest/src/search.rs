//! Case-insensitive substring search over the full-text index.

use noesis_core::constants::{MAX_SEARCH_RESULTS, SEARCH_CONTEXT_RADIUS};
use noesis_core::models::ChapterKey;

use crate::index::CorpusIndex;

/// One search hit with a context window around the first match.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub chapter: ChapterKey,
    pub book_id: String,
    pub chapter_title: String,
    /// Text surrounding the first match.
    pub context: String,
    /// Number of matches within the chapter.
    pub occurrences: usize,
}

/// Search every chapter's full text for `query`, case-insensitively.
/// Hits are ordered by descending occurrence count, then chapter key,
/// and capped at `limit` (itself capped at [`MAX_SEARCH_RESULTS`]).
pub fn search_corpus(index: &CorpusIndex, query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let limit = limit.min(MAX_SEARCH_RESULTS);

    let mut hits: Vec<SearchHit> = Vec::new();
    for chapter in index.chapters_sorted() {
        let Some(text) = index.full_text(&chapter.key) else {
            continue;
        };
        let haystack = text.to_lowercase();
        let Some(first) = haystack.find(&needle) else {
            continue;
        };
        let occurrences = haystack.matches(&needle).count();
        hits.push(SearchHit {
            chapter: chapter.key.clone(),
            book_id: chapter.book_id.clone(),
            chapter_title: chapter.title.clone(),
            context: context_window(text, first, needle.len()),
            occurrences,
        });
    }

    hits.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.chapter.cmp(&b.chapter))
    });
    hits.truncate(limit);
    hits
}

/// Slice a window of roughly `SEARCH_CONTEXT_RADIUS` bytes either side
/// of the match, snapped outward/inward to char boundaries.
fn context_window(text: &str, match_start: usize, match_len: usize) -> String {
    let mut start = match_start.saturating_sub(SEARCH_CONTEXT_RADIUS);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (match_start + match_len + SEARCH_CONTEXT_RADIUS).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    let mut window = text[start..end].trim().to_string();
    if start > 0 {
        window = format!("...{window}");
    }
    if end < text.len() {
        window.push_str("...");
    }
    window
}
