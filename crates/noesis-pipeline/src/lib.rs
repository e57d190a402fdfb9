//! # noesis-pipeline
//!
//! The coordinator that drives the whole pipeline through its phases,
//! owns the dialogue history, and persists state between runs.

pub mod coordinator;
pub mod persistence;
pub mod telemetry;

pub use coordinator::PipelineCoordinator;
pub use persistence::StateStore;
