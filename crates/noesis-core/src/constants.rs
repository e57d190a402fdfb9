/// Noesis system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Characters of context kept on each side of a search match.
pub const SEARCH_CONTEXT_RADIUS: usize = 100;

/// Maximum results returned by a corpus search.
pub const MAX_SEARCH_RESULTS: usize = 50;

/// Maximum connections retained in the concept graph.
pub const MAX_CONCEPT_CONNECTIONS: usize = 500;

/// Maximum glossary entries in a synthesized book.
pub const MAX_GLOSSARY_ENTRIES: usize = 50;

/// Number of distinct meditation pass kinds. Configured pass counts
/// above this cycle through the kinds again.
pub const MEDITATION_PASS_KINDS: usize = 5;
