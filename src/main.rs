//! Field normalizer CLI application.
//!
//! Runs one normalizer operation on a single input value and prints the
//! canonical value as JSON (`parse`, `filter`) or the display string
//! (`format`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fieldnorm::{NormalizerConfig, RawValue, ValueNormalizer};

/// Field value normalizer
///
/// Validates and normalizes phone numbers, email lists, geo coordinates
/// and time flags. INPUT is read as JSON when it parses as JSON, otherwise
/// as a literal string.
#[derive(Parser)]
#[command(name = "fieldnorm")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Default country code for phone formatting
    #[arg(long, global = true)]
    country: Option<u32>,

    /// Default region code for phone formatting
    #[arg(long, global = true)]
    region: Option<u32>,

    /// Require email domains to resolve
    #[arg(long, global = true)]
    check_dns: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strictly parse a value; fails on the first invalid element
    Parse {
        kind: Kind,
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
    },
    /// Leniently filter a value; invalid elements are dropped
    Filter {
        kind: Kind,
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
    },
    /// Render a value for display
    Format {
        kind: Kind,
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Phone,
    Email,
    Geo,
    TimeFlag,
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Parse,
    Filter,
    Format,
}

/// Command handler owning the resolved configuration.
struct NormalizeHandler {
    config: NormalizerConfig,
}

impl NormalizeHandler {
    fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    fn run(&self, op: Operation, kind: Kind, input: &str) -> Result<String> {
        let raw = read_input(input);
        tracing::debug!(?op, ?kind, ?raw, "normalizing");

        match kind {
            Kind::Phone => apply(&self.config.phone(), op, &raw),
            Kind::Email => apply(&self.config.email(), op, &raw),
            Kind::Geo => apply(&self.config.geo(), op, &raw),
            Kind::TimeFlag => apply(&self.config.time_flag(), op, &raw),
        }
    }
}

fn apply<N>(normalizer: &N, op: Operation, raw: &RawValue) -> Result<String>
where
    N: ValueNormalizer,
    N::Value: Serialize,
    N::Filtered: Serialize,
{
    let name = normalizer.name();
    match op {
        Operation::Parse => {
            let value = normalizer
                .parse(raw)
                .with_context(|| format!("{} parse failed", name))?;
            Ok(serde_json::to_string(&value)?)
        }
        Operation::Filter => Ok(serde_json::to_string(&normalizer.filter(raw))?),
        Operation::Format => normalizer
            .format(raw)
            .with_context(|| format!("{} format failed", name)),
    }
}

/// JSON when it parses, otherwise the literal string.
fn read_input(input: &str) -> RawValue {
    serde_json::from_str::<serde_json::Value>(input)
        .map(RawValue::from)
        .unwrap_or_else(|_| RawValue::from(input))
}

/// Applies command-line overrides on top of the loaded configuration.
fn build_config(cli: &Cli) -> Result<NormalizerConfig> {
    let mut config = NormalizerConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(country) = cli.country {
        config.phone.country = country;
    }
    if let Some(region) = cli.region {
        config.phone.region = region;
    }
    if cli.check_dns {
        config.email.check_dns = true;
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let handler = NormalizeHandler::new(build_config(&cli)?);

    let (op, kind, input) = match &cli.command {
        Commands::Parse { kind, input } => (Operation::Parse, *kind, input),
        Commands::Filter { kind, input } => (Operation::Filter, *kind, input),
        Commands::Format { kind, input } => (Operation::Format, *kind, input),
    };

    println!("{}", handler.run(op, kind, input)?);

    Ok(())
}
