//! Run configuration.
//!
//! Everything the pipeline needs is parsed from the command line into one
//! explicit `Config` value and passed by reference from there on. There is
//! no module-level state.

use std::path::PathBuf;

use crate::error::{BisociateError, Result};

/// Model identifier sent with every completion request
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

/// Chat-completions endpoint base URL
pub const DEFAULT_ENDPOINT: &str = "https://models.github.ai/inference";

/// Primer pool location when `--primer-file` is not given
pub const DEFAULT_PRIMER_FILE: &str = "./primer.yaml";

/// Mechanisms drawn per round
pub const DEFAULT_SAMPLES: usize = 6;

/// Baseline sampling temperature (the ideation stage runs slightly hotter)
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Ranked ideas printed per round
pub const DEFAULT_TOP: usize = 3;

/// Configuration for one ideation round
#[derive(Debug, Clone)]
pub struct Config {
    /// Target problem to generate ideas for
    pub problem: String,
    /// Model identifier passed to the inference service
    pub model: String,
    /// Path to the YAML primer pool
    pub primer_file: PathBuf,
    /// Number of mechanisms sampled per round
    pub samples: usize,
    /// Baseline sampling temperature, 0.0-1.0
    pub temperature: f64,
    /// Inference endpoint base URL
    pub endpoint: String,
    /// Bearer token for the inference service
    pub token: String,
    /// Number of ranked ideas to keep
    pub top: usize,
    /// Print intermediate stage output
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problem: String::new(),
            model: DEFAULT_MODEL.to_string(),
            primer_file: PathBuf::from(DEFAULT_PRIMER_FILE),
            samples: DEFAULT_SAMPLES,
            temperature: DEFAULT_TEMPERATURE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: String::new(),
            top: DEFAULT_TOP,
            verbose: false,
        }
    }
}

impl Config {
    /// Reject configurations the pipeline cannot run with.
    ///
    /// Called once after CLI parsing; pipeline code can assume a validated
    /// config.
    pub fn validate(&self) -> Result<()> {
        if self.problem.trim().is_empty() {
            return Err(BisociateError::Config(
                "Problem statement is required. Pass it as a positional argument or with \
                 --problem."
                    .to_string(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(BisociateError::Config(
                "API token is required. Set the GITHUB_TOKEN environment variable or pass \
                 --token."
                    .to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(BisociateError::Config(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        if self.samples == 0 {
            return Err(BisociateError::Config(
                "sample count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
