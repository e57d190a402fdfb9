//! Corpus loader: fetches the catalog and books through a
//! [`CorpusSource`], caches fetched books, and builds the corpus index.
//!
//! Book fetches run on a bounded worker pool sized by
//! `max_concurrent_loads`; indexing happens on the calling thread in
//! catalog order so the resulting index is deterministic regardless of
//! fetch completion order.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use noesis_core::config::CorpusConfig;
use noesis_core::errors::{NoesisResult, PhaseError};
use noesis_core::models::{Book, Catalog, IngestSummary, Phase};
use noesis_core::traits::{CorpusSource, ProgressSink};
use noesis_core::CancelToken;
use tracing::{info, warn};

use crate::index::CorpusIndex;

pub struct CorpusLoader {
    source: Arc<dyn CorpusSource>,
    config: CorpusConfig,
    cache: DashMap<String, Arc<Book>>,
}

impl CorpusLoader {
    pub fn new(source: Arc<dyn CorpusSource>, config: CorpusConfig) -> Self {
        Self {
            source,
            config,
            cache: DashMap::new(),
        }
    }

    /// Fetch the catalog. Catalog failures are fatal to ingestion.
    pub fn load_catalog(&self) -> NoesisResult<Catalog> {
        Ok(self.source.fetch_catalog()?)
    }

    /// Fetch one book, consulting the cache first. `Ok(None)` means the
    /// source does not have the book.
    pub fn load_book(&self, book_id: &str) -> NoesisResult<Option<Arc<Book>>> {
        if let Some(cached) = self.cache.get(book_id) {
            return Ok(Some(cached.clone()));
        }
        match self.source.fetch_book(book_id)? {
            Some(book) => {
                let book = Arc::new(book);
                self.cache.insert(book_id.to_string(), book.clone());
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Which books to load: the configured collection when set,
    /// otherwise every book in the catalog, in catalog order.
    fn book_ids(&self, catalog: &Catalog) -> Vec<String> {
        if self.config.collection_books.is_empty() {
            catalog.book_ids()
        } else {
            self.config.collection_books.clone()
        }
    }

    /// Load the whole corpus and build the index.
    ///
    /// Individual book failures are logged and the book skipped; only a
    /// catalog failure or cancellation aborts the run. Progress is
    /// monotonically non-decreasing and ends at exactly 100.
    pub fn ingest_all(
        &self,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> NoesisResult<(CorpusIndex, IngestSummary)> {
        progress.progress(Phase::Ingesting, 0, "loading catalog");
        let catalog = self.load_catalog()?;
        let ids = self.book_ids(&catalog);
        let total = ids.len();

        let mut index = CorpusIndex::new();
        if total == 0 {
            progress.progress(Phase::Ingesting, 100, "no books to load");
            let stats = *index.stats();
            return Ok((
                index,
                IngestSummary {
                    total_books: 0,
                    loaded_books: 0,
                    skipped: Vec::new(),
                    stats,
                },
            ));
        }

        let fetched = self.fetch_books(&ids, progress, cancel);

        if cancel.is_cancelled() {
            return Err(PhaseError::Cancelled {
                phase: Phase::Ingesting,
            }
            .into());
        }

        progress.progress(Phase::Ingesting, 95, "indexing corpus");
        let mut skipped = Vec::new();
        for (id, book) in ids.iter().zip(fetched) {
            match book {
                Some(book) => index.index_book((*book).clone()),
                None => skipped.push(id.clone()),
            }
        }

        let summary = IngestSummary {
            total_books: total,
            loaded_books: index.book_ids().len(),
            skipped,
            stats: *index.stats(),
        };
        info!(
            books = summary.loaded_books,
            skipped = summary.skipped.len(),
            words = summary.stats.total_words,
            "corpus ingested"
        );
        progress.progress(Phase::Ingesting, 100, "ingestion complete");
        Ok((index, summary))
    }

    /// Fetch every id on a bounded worker pool. Results come back in
    /// completion order; the returned vec is in `ids` order.
    fn fetch_books(
        &self,
        ids: &[String],
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Vec<Option<Arc<Book>>> {
        let total = ids.len();
        let workers = self.config.max_concurrent_loads.clamp(1, total);

        let queue: Mutex<VecDeque<(usize, String)>> =
            Mutex::new(ids.iter().cloned().enumerate().collect());
        let (tx, rx) = mpsc::channel::<(usize, String, NoesisResult<Option<Arc<Book>>>)>();

        let mut fetched: Vec<Option<Arc<Book>>> = vec![None; total];
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let queue = &queue;
                scope.spawn(move || loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    let job = queue.lock().ok().and_then(|mut q| q.pop_front());
                    let Some((slot, id)) = job else { break };
                    let result = self.load_book(&id);
                    if tx.send((slot, id, result)).is_err() {
                        break;
                    }
                });
            }
            drop(tx);

            let mut done = 0usize;
            for (slot, id, result) in rx {
                done += 1;
                match result {
                    Ok(Some(book)) => fetched[slot] = Some(book),
                    Ok(None) => warn!(book = %id, "book not found in source, skipping"),
                    Err(e) => warn!(book = %id, error = %e, "book load failed, skipping"),
                }
                // 0..=90 during fetch; indexing takes the tail.
                let percent = (done * 90 / total) as u8;
                progress.progress(Phase::Ingesting, percent, &format!("loaded {id}"));
            }
        });

        fetched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noesis_core::models::{Chapter, PhaseStatus, Section};
    use noesis_core::traits::ProgressSink;

    use crate::source::MemorySource;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<(Phase, u8)>>,
    }

    impl ProgressSink for RecordingSink {
        fn progress(&self, phase: Phase, percent: u8, _label: &str) {
            if let Ok(mut events) = self.events.lock() {
                events.push((phase, percent));
            }
        }
        fn phase_status(&self, _phase: Phase, _status: PhaseStatus) {}
    }

    fn book(id: &str, words: &str) -> Book {
        Book {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: None,
            author: None,
            sections: vec![Section {
                id: "s1".into(),
                title: "S".into(),
                subtitle: None,
                chapters: vec![Chapter {
                    id: "c1".into(),
                    title: "C".into(),
                    epigraph: None,
                    content: words.to_string(),
                    closing_question: None,
                    exercises: vec![],
                }],
            }],
        }
    }

    fn loader(source: MemorySource) -> CorpusLoader {
        CorpusLoader::new(Arc::new(source), CorpusConfig::default())
    }

    #[test]
    fn ingest_loads_every_catalog_book_and_sums_stats() {
        let source = MemorySource::new()
            .with_book(book("alpha", "one two three"))
            .with_book(book("beta", "four five"));
        let loader = loader(source);
        let sink = RecordingSink::default();

        let (index, summary) = loader.ingest_all(&sink, &CancelToken::new()).unwrap();

        assert_eq!(summary.total_books, 2);
        assert_eq!(summary.loaded_books, 2);
        assert!(summary.skipped.is_empty());
        assert_eq!(summary.stats.total_words, 5);
        assert_eq!(index.book_ids(), &["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_exactly_100() {
        let source = MemorySource::new()
            .with_book(book("a", "w"))
            .with_book(book("b", "w"))
            .with_book(book("c", "w"));
        let loader = loader(source);
        let sink = RecordingSink::default();

        loader.ingest_all(&sink, &CancelToken::new()).unwrap();

        let events = sink.events.lock().unwrap();
        let percents: Vec<u8> = events.iter().map(|(_, p)| *p).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{percents:?}");
        assert_eq!(*percents.last().unwrap(), 100);
    }

    #[test]
    fn failing_book_is_skipped_with_others_loaded() {
        let source = MemorySource::new()
            .with_book(book("good", "some words here"))
            .with_failing_book("broken");
        let loader = loader(source);

        let (index, summary) = loader
            .ingest_all(&RecordingSink::default(), &CancelToken::new())
            .unwrap();

        assert_eq!(summary.loaded_books, 1);
        assert_eq!(summary.skipped, vec!["broken".to_string()]);
        assert!(index.book("good").is_some());
        assert!(index.book("broken").is_none());
    }

    #[test]
    fn ingest_is_idempotent() {
        let source = MemorySource::new().with_book(book("a", "one two"));
        let loader = loader(source);

        let (_, first) = loader
            .ingest_all(&RecordingSink::default(), &CancelToken::new())
            .unwrap();
        let (_, second) = loader
            .ingest_all(&RecordingSink::default(), &CancelToken::new())
            .unwrap();

        assert_eq!(first.stats, second.stats);
        assert_eq!(first.loaded_books, second.loaded_books);
    }

    #[test]
    fn second_ingest_hits_the_cache() {
        let source = MemorySource::new().with_book(book("a", "one"));
        let loader = CorpusLoader::new(Arc::new(source), CorpusConfig::default());

        loader
            .ingest_all(&RecordingSink::default(), &CancelToken::new())
            .unwrap();
        let first = loader.load_book("a").unwrap().unwrap();
        let second = loader.load_book("a").unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cancelled_ingest_returns_phase_cancelled() {
        let source = MemorySource::new().with_book(book("a", "one"));
        let loader = loader(source);
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = loader
            .ingest_all(&RecordingSink::default(), &cancel)
            .unwrap_err();
        assert!(err.to_string().contains("cancelled"), "{err}");
    }

    #[test]
    fn configured_collection_restricts_and_orders_loading() {
        let source = MemorySource::new()
            .with_book(book("a", "w"))
            .with_book(book("b", "w"))
            .with_book(book("c", "w"));
        let config = CorpusConfig {
            collection_books: vec!["c".into(), "a".into()],
            ..Default::default()
        };
        let loader = CorpusLoader::new(Arc::new(source), config);

        let (index, summary) = loader
            .ingest_all(&RecordingSink::default(), &CancelToken::new())
            .unwrap();

        assert_eq!(summary.total_books, 2);
        assert_eq!(index.book_ids(), &["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn empty_catalog_yields_empty_index() {
        let loader = loader(MemorySource::new());
        let sink = RecordingSink::default();
        let (index, summary) = loader.ingest_all(&sink, &CancelToken::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(summary.total_books, 0);
        let events = sink.events.lock().unwrap();
        assert_eq!(events.last().unwrap().1, 100);
    }
}
