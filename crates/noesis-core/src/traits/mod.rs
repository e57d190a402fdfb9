//! Seams between the pipeline and its environment. The coordinator is
//! generic over these so tests can substitute deterministic doubles.

mod notifier;
mod progress;
mod source;

pub use notifier::{LogNotifier, Notifier};
pub use progress::{LogProgressSink, ProgressSink};
pub use source::CorpusSource;
