//! One module per pass kind, each a pure function from corpus and
//! analysis to candidate insights. Dedup against earlier passes happens
//! in the engine, not here.

pub mod pass1_comprehension;
pub mod pass2_connection;
pub mod pass3_deepening;
pub mod pass4_integration;
pub mod pass5_transcendence;
