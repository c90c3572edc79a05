//! Recon-Dispatch main entry point
//!
//! This is the command-line interface for the Recon-Dispatch engine. Envelopes
//! are written to stdout, one JSON object per line; all logging goes to stderr.

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use recon_dispatch::config::{load_config_with_hash, Config};
use recon_dispatch::{CustodyEntry, Dispatcher, InvestigationPlan, ResultEnvelope};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Recon-Dispatch: target-driven information gathering
///
/// Dispatches a target to the strategy registered for a source category and
/// prints the resulting envelope as a single line of JSON.
#[derive(Parser, Debug)]
#[command(name = "recon-dispatch")]
#[command(version)]
#[command(about = "Target-driven information-gathering dispatcher", long_about = None)]
struct Cli {
    /// Identifying handle to investigate (username, name, email, phone)
    #[arg(value_name = "TARGET", value_parser = NonEmptyStringValueParser::new())]
    target: String,

    /// Source category to query (e.g., social_platforms, public_records, forums)
    #[arg(value_name = "SOURCE", required_unless_present = "plan")]
    source: Option<String>,

    /// Classify the target and query every planned source concurrently
    #[arg(long, conflicts_with = "source")]
    plan: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP client timeout (milliseconds)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(timeout_ms) = cli.timeout_ms {
        config.client = config
            .client
            .with_timeout(Duration::from_millis(timeout_ms));
    }

    let dispatcher =
        Dispatcher::from_config(&config).context("Failed to construct the HTTP client")?;
    tracing::debug!("Registered sources: {:?}", dispatcher.registry().categories());

    let envelopes = if cli.plan {
        run_plan(&dispatcher, &cli.target).await
    } else {
        // clap guarantees SOURCE is present without --plan
        let source = cli.source.as_deref().unwrap_or_default();
        vec![dispatcher.run(&cli.target, source).await]
    };

    for envelope in &envelopes {
        record_custody(envelope)?;
        println!("{}", envelope.to_json_line()?);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG`, when set, takes precedence over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("recon_dispatch=info,warn"),
                1 => EnvFilter::new("recon_dispatch=debug,info"),
                2 => EnvFilter::new("recon_dispatch=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, otherwise the defaults
fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!(
        "Configuration loaded (hash: {}, {} probes)",
        hash,
        config.probes.len()
    );

    Ok(config)
}

/// Classifies the target and fans out to every planned source
async fn run_plan(dispatcher: &Dispatcher, target: &str) -> Vec<ResultEnvelope> {
    let plan = InvestigationPlan::for_target(target);
    let sources = plan.sources(dispatcher.registry());

    tracing::info!(
        "Target classified as {}; querying {} sources",
        plan.kind(),
        sources.len()
    );
    let unavailable = plan.unavailable(dispatcher.registry());
    if !unavailable.is_empty() {
        tracing::debug!("No strategy registered for: {}", unavailable.join(", "));
    }

    dispatcher.run_many(plan.target(), &sources).await
}

/// Logs the custody digest of an envelope
fn record_custody(envelope: &ResultEnvelope) -> anyhow::Result<()> {
    let entry = CustodyEntry::record(envelope)?;
    tracing::info!(
        "Custody: {} at {} sha256={} ({})",
        entry.source,
        entry.timestamp,
        entry.digest,
        entry.method
    );
    Ok(())
}
