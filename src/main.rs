#![forbid(unsafe_code)]
//! Bisociate command line interface

use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use console::style;

use bisociate::config::{self, Config};
use bisociate::{execute_ideate, ModelsClient};

#[derive(Parser)]
#[command(name = "bisociate")]
#[command(about = "Mechanism-primed idea generation through a three-stage prompt chain")]
#[command(version)]
struct Cli {
    /// Problem statement (used when --problem is not given)
    #[arg(value_name = "PROBLEM")]
    statement: Option<String>,

    /// Problem statement to generate ideas for
    #[arg(short, long, value_name = "TEXT")]
    problem: Option<String>,

    /// Model identifier
    #[arg(short, long, default_value = config::DEFAULT_MODEL, value_name = "ID")]
    model: String,

    /// Primer file holding a YAML list of mechanism descriptions
    #[arg(short = 'f', long, default_value = config::DEFAULT_PRIMER_FILE, value_name = "PATH")]
    primer_file: PathBuf,

    /// Mechanisms sampled from the primer pool per round
    #[arg(short, long, default_value_t = config::DEFAULT_SAMPLES, value_name = "N")]
    samples: usize,

    /// Baseline sampling temperature, 0.0-1.0
    #[arg(short, long, default_value_t = config::DEFAULT_TEMPERATURE, value_name = "T")]
    temperature: f64,

    /// API token (defaults to the GITHUB_TOKEN environment variable)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_name = "SECRET")]
    token: Option<String>,

    /// Inference endpoint base URL
    #[arg(long, default_value = config::DEFAULT_ENDPOINT, value_name = "URL")]
    endpoint: String,

    /// Also print the sampled mechanisms and intermediate stage output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // --help and --version are not errors; everything else exits 1
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    });

    init_tracing(cli.verbose);

    let config = Config {
        problem: cli.problem.or(cli.statement).unwrap_or_default(),
        model: cli.model,
        primer_file: cli.primer_file,
        samples: cli.samples,
        temperature: cli.temperature,
        endpoint: cli.endpoint,
        token: cli.token.unwrap_or_default(),
        top: config::DEFAULT_TOP,
        verbose: cli.verbose,
    };

    if let Err(err) = config.validate() {
        eprintln!("{} {}", style("✗").red(), err);
        std::process::exit(1);
    }

    if let Err(err) = run(&config) {
        eprintln!("{} {:#}", style("✗").red(), err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let client = ModelsClient::new(&config.endpoint, &config.token);
    execute_ideate(config, &client).context("ideation round failed")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "bisociate=debug"
    } else {
        "bisociate=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
