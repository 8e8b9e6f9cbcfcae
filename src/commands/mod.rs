//! CLI command implementations.
//!
//! The tool has a single command: run one ideation round.

pub mod ideate;

pub use ideate::{execute_ideate, run_pipeline, RoundReport};
