//! Three-stage prompt chain.
//!
//! Connection, ideation, ranking: strictly sequential, each stage's output
//! feeding the next stage's prompt. No retries; a failed request fails the
//! round.

pub mod prompts;

pub use prompts::StagePrompt;

use console::style;

use crate::config::Config;
use crate::error::Result;
use crate::inference::{CompletionClient, CompletionRequest};

/// The ideation stage runs hotter than the configured baseline
const IDEATION_TEMPERATURE_BOOST: f64 = 0.1;
/// The ranking stage runs cold for consistent scoring
const RANKING_TEMPERATURE: f64 = 0.2;
/// Nucleus sampling is pinned for all stages
const TOP_P: f64 = 1.0;

/// The three textual outputs of one round
#[derive(Debug, Clone)]
pub struct ChainOutcome {
    /// Stage 1: cross-domain connection observation
    pub connection: String,
    /// Stage 2: unranked idea list
    pub ideation: String,
    /// Stage 3: raw ranking payload, not guaranteed well-formed
    pub ranking_raw: String,
}

/// Run the three stages in order and collect their outputs.
pub fn run_chain(
    client: &dyn CompletionClient,
    config: &Config,
    mechanisms: &[String],
) -> Result<ChainOutcome> {
    println!(
        "{} [1/3] Observing a cross-domain connection...",
        style("→").blue()
    );
    let prompt = prompts::connection_prompt(mechanisms);
    let connection = client.complete(&stage_request(config, prompt, config.temperature, false))?;
    tracing::debug!(chars = connection.len(), "connection stage complete");

    println!("{} [2/3] Generating candidate ideas...", style("→").blue());
    let prompt = prompts::ideation_prompt(&config.problem, &connection, mechanisms);
    let ideation_temperature = (config.temperature + IDEATION_TEMPERATURE_BOOST).min(1.0);
    let ideation = client.complete(&stage_request(config, prompt, ideation_temperature, false))?;
    tracing::debug!(chars = ideation.len(), "ideation stage complete");

    println!("{} [3/3] Scoring and ranking ideas...", style("→").blue());
    let prompt = prompts::ranking_prompt(&ideation);
    let ranking_raw = client.complete(&stage_request(config, prompt, RANKING_TEMPERATURE, true))?;
    tracing::debug!(chars = ranking_raw.len(), "ranking stage complete");

    Ok(ChainOutcome {
        connection,
        ideation,
        ranking_raw,
    })
}

fn stage_request(
    config: &Config,
    prompt: StagePrompt,
    temperature: f64,
    json_object: bool,
) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        system: prompt.system,
        user: prompt.user,
        temperature,
        top_p: TOP_P,
        json_object,
    }
}
