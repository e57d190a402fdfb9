//! Corpus source implementations behind the [`CorpusSource`] trait.
//!
//! [`CorpusSource`]: noesis_core::traits::CorpusSource

mod fs;
mod http;
mod memory;

pub use fs::FsSource;
pub use http::HttpSource;
pub use memory::MemorySource;
