//! pubparse - PubMed/PMC XML to JSON converter
//!
//! Usage: `pubparse <pubmed|pmc> -i <input> [-o <output>] [--workers N]`
//!
//! Settings resolve CLI → environment → TOML config → built-in defaults.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pubparse::app::{self, RunOptions, RunOutcome};
use pubparse::ArticleFamily;
use pubparse_common::config::{
    load_toml_config, resolve_schema_dir, resolve_workers, TomlConfig, ENV_CONFIG,
    ENV_SCHEMA_DIR, ENV_WORKERS,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for pubparse
#[derive(Parser, Debug)]
#[command(name = "pubparse")]
#[command(about = "Convert PubMed and PMC XML files into schema-validated JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Convert PubMed (and PubMed Book) citation XML
    Pubmed(ConvertArgs),
    /// Convert PMC full-text (JATS) XML
    Pmc(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input XML file or directory (searched recursively)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output directory (default: processed_<input name> next to the input)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(long, env = ENV_WORKERS, allow_negative_numbers = true)]
    workers: Option<i64>,

    /// Directory containing pubmed_json_schema.json and pmc_json_schema.json
    #[arg(long, env = ENV_SCHEMA_DIR)]
    schema_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = ENV_CONFIG)]
    config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Mode {
    fn split(self) -> (ArticleFamily, ConvertArgs) {
        match self {
            Mode::Pubmed(args) => (ArticleFamily::Pubmed, args),
            Mode::Pmc(args) => (ArticleFamily::Pmc, args),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (declared, args) = cli.mode.split();

    let toml_config = load_toml_config(args.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&toml_config);

    info!("Starting pubparse v{}", env!("CARGO_PKG_VERSION"));

    let workers = resolve_workers(args.workers, &toml_config)?;
    let schema_dir = resolve_schema_dir(
        args.schema_dir.as_deref(),
        &toml_config,
        &pubparse::bundled_schema_dir(),
    );

    let options = RunOptions {
        declared,
        input: args.input,
        output: args.output,
        workers,
        schema_dir,
        report_name: toml_config.report_name().to_string(),
        progress_interval: toml_config.progress_interval(),
        show_progress: !args.quiet,
    };

    let outcome = app::run(options).await?;
    print_summary(&outcome);

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(config: &TomlConfig) {
    let level = config.logging.level.trim();
    let directive = if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("pubparse={level},pubparse_common={level}")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_summary(outcome: &RunOutcome) {
    let summary = match &outcome.result {
        Ok(summary) => Some(summary),
        Err(e) => e.summary(),
    };

    if let Some(summary) = summary {
        println!(
            "Converted {} of {} file(s) ({} failed, {} skipped) in {:.2}s",
            summary.succeeded,
            summary.total,
            summary.failed,
            summary.skipped(),
            summary.elapsed.as_secs_f64()
        );
    }
    println!("Output directory: {}", outcome.output_dir.display());
    println!("Report: {}", outcome.report_path.display());

    if let Err(e) = &outcome.result {
        error!(input = %outcome.input.display(), error = %e, "Conversion did not complete cleanly");
        eprintln!("Error: {}", e);
    }
}
