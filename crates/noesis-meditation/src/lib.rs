//! # noesis-meditation
//!
//! Runs a configured number of meditation passes over the analyzed
//! corpus. Each pass has a distinct kind and contributes only insights
//! not already discovered by earlier passes.

pub mod engine;
pub mod passes;

pub use engine::MeditationEngine;
