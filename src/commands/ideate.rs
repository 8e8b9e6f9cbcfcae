//! Ideate command: one full round from primer file to ranked ideas.

use console::style;
use rand::Rng;

use crate::chain::{run_chain, ChainOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::inference::CompletionClient;
use crate::primer::{load_primer, sample_mechanisms};
use crate::rank::rank_ideas;

/// Everything one round produced
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// Mechanisms drawn for this round
    pub mechanisms: Vec<String>,
    /// The three stage outputs
    pub outcome: ChainOutcome,
    /// Formatted ranked ideas, best first
    pub ranked: Vec<String>,
}

/// Load, sample, run the chain, rank. The random source is a parameter so
/// tests can pin the drawn subset.
pub fn run_pipeline<R: Rng + ?Sized>(
    config: &Config,
    client: &dyn CompletionClient,
    rng: &mut R,
) -> Result<RoundReport> {
    let pool = load_primer(&config.primer_file)?;
    let mechanisms = sample_mechanisms(&pool, config.samples, rng)?;
    println!(
        "{} Sampled {} of {} mechanisms from {:?}",
        style("→").blue(),
        mechanisms.len(),
        pool.len(),
        config.primer_file
    );

    let outcome = run_chain(client, config, &mechanisms)?;
    let ranked = rank_ideas(&outcome.ranking_raw, config.top);

    Ok(RoundReport {
        mechanisms,
        outcome,
        ranked,
    })
}

/// Execute one round and print the report.
pub fn execute_ideate(config: &Config, client: &dyn CompletionClient) -> Result<()> {
    let report = run_pipeline(config, client, &mut rand::rng())?;

    if config.verbose {
        println!();
        println!("{} Sampled mechanisms:", style("!").yellow());
        for mechanism in &report.mechanisms {
            println!("  - {}", mechanism);
        }
        println!();
        println!("{} Connection:", style("!").yellow());
        println!("{}", report.outcome.connection);
        println!();
        println!("{} Unranked ideas:", style("!").yellow());
        println!("{}", report.outcome.ideation);
        println!();
        println!("{} Raw ranking payload:", style("!").yellow());
        println!("{}", report.outcome.ranking_raw);
    }

    println!();
    println!(
        "{} Top ideas for: {}",
        style("✓").green().bold(),
        style(&config.problem).cyan()
    );
    for (index, entry) in report.ranked.iter().enumerate() {
        println!("  {}. {}", index + 1, entry);
    }

    Ok(())
}
