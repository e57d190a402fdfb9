use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Base path or URL under which book resources live.
    pub base_url: String,
    /// Catalog resource name, resolved against `base_url`.
    pub catalog_file: String,
    /// The curated list of book ids to ingest. When empty, ingestion
    /// enumerates the loaded catalog in order instead.
    pub collection_books: Vec<String>,
    /// Upper bound on concurrent book fetches during ingestion.
    pub max_concurrent_loads: usize,
    /// Per-fetch timeout.
    pub fetch_timeout_secs: u64,
    /// Retries per fetch before a resource counts as unavailable.
    pub fetch_retries: u32,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            catalog_file: defaults::DEFAULT_CATALOG_FILE.to_string(),
            collection_books: Vec::new(),
            max_concurrent_loads: defaults::DEFAULT_MAX_CONCURRENT_LOADS,
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
            fetch_retries: defaults::DEFAULT_FETCH_RETRIES,
        }
    }
}
