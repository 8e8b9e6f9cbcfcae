#![forbid(unsafe_code)]

//! # Bisociate
//!
//! Mechanism-primed idea generation. A round samples a handful of mechanism
//! descriptions (how natural or engineered systems work) from a primer
//! pool, then walks a three-stage prompt chain against a chat-completions
//! endpoint: observe one cross-domain connection, generate five concrete
//! ideas for the target problem, then score and rank them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bisociate::{execute_ideate, Config, ModelsClient};
//!
//! fn main() -> bisociate::Result<()> {
//!     let config = Config {
//!         problem: "reduce cold-start latency in serverless functions".to_string(),
//!         token: std::env::var("GITHUB_TOKEN").unwrap_or_default(),
//!         ..Config::default()
//!     };
//!     config.validate()?;
//!
//!     let client = ModelsClient::new(&config.endpoint, &config.token);
//!     execute_ideate(&config, &client)
//! }
//! ```

pub mod chain;
pub mod commands;
pub mod config;
pub mod error;
pub mod inference;
pub mod primer;
pub mod rank;

// Re-exports
pub use chain::{run_chain, ChainOutcome, StagePrompt};
pub use commands::{execute_ideate, run_pipeline, RoundReport};
pub use config::Config;
pub use error::{BisociateError, Result};
pub use inference::{CompletionClient, CompletionRequest, ModelsClient};
pub use primer::{load_primer, sample_mechanisms};
pub use rank::{rank_ideas, RankedIdea};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
