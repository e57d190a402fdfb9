//! # noesis-core
//!
//! Foundation crate for the noesis knowledge-synthesis pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancel::CancelToken;
pub use config::NoesisConfig;
pub use errors::{NoesisError, NoesisResult};
pub use models::{Phase, PhaseStatus};
