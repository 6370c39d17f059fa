//! CLI Command Handlers
//!
//! `serve` runs the HTTP API; `scan` does one synchronous refresh and prints
//! the ranked candidates.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::http::{self, AnalysisPayload};
use crate::adapters::market_data::{YahooChartClient, YahooChartConfig};
use crate::application::{AnalyzeRequest, PacingConfig, RefreshCoordinator};
use crate::config::{load_config, Config};
use crate::strategy::{check_min_z, DeviationPolicy, RankingOutcome};

/// Mean-reversion stock screener
#[derive(Parser, Debug)]
#[command(
    name = "screener",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mean-reversion screener for large-cap US equities",
    long_about = "Fetches recent daily closes for a ticker universe, scores each instrument \
                  for statistical reversion to its mean, and ranks the most oversold candidates."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve(ServeCmd),

    /// Fetch once, rank, print and exit
    Scan(ScanCmd),
}

/// Serve the JSON API
#[derive(Parser, Debug)]
pub struct ServeCmd {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override bind address
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Override listen port (takes precedence over PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Start a refresh as soon as the server is up
    #[arg(long)]
    pub fetch_on_start: bool,
}

/// One-shot scan
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum |z-score| to report
    #[arg(long, value_name = "Z", value_parser = parse_min_z)]
    pub min_z: Option<f64>,

    /// Number of candidates to print
    #[arg(short = 'n', long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Deviation policy: oversold_only or two_sided
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<DeviationPolicy>,

    /// Comma-separated tickers replacing the configured universe
    #[arg(long, value_name = "TICKERS", value_delimiter = ',')]
    pub tickers: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_min_z(value: &str) -> Result<f64, String> {
    let min_z = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    check_min_z(min_z)
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    match app.command {
        Command::Serve(cmd) => {
            let config = resolve_config(cmd.config.as_deref())?;
            init_logging(app.verbose, app.debug, &config.logging.level)?;
            serve_command(cmd, config).await
        }
        Command::Scan(cmd) => {
            let config = resolve_config(cmd.config.as_deref())?;
            init_logging(app.verbose, app.debug, &config.logging.level)?;
            scan_command(cmd, config).await
        }
    }
}

/// Initialize logging system
///
/// `RUST_LOG` wins; otherwise `--debug`, then `--verbose`, then the configured level.
pub fn init_logging(verbose: bool, debug: bool, configured_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let fallback = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        configured_level
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid log level '{}'", fallback))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load the config file if given, expanding `~`; defaults otherwise
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
            load_config(&expanded)
                .with_context(|| format!("Failed to load configuration from {}", expanded))
        }
        None => Ok(Config::default()),
    }
}

fn build_coordinator(config: &Config, tickers: Vec<String>) -> Result<RefreshCoordinator> {
    let provider = YahooChartClient::with_config(YahooChartConfig::from(config))
        .context("Failed to create price history client")?;

    Ok(RefreshCoordinator::new(Arc::new(provider), tickers, config.analysis.clone())
        .with_pacing(PacingConfig::from(config)))
}

/// Handle serve command
async fn serve_command(cmd: ServeCmd, config: Config) -> Result<()> {
    let host = cmd.host.unwrap_or_else(|| config.server.host.clone());
    let port = cmd.port.unwrap_or_else(|| config.server.get_port());
    let coordinator = build_coordinator(&config, config.tickers())?;

    tracing::info!(
        tickers = coordinator.universe().len(),
        policy = %config.analysis.deviation_policy,
        "Starting screener API on {}:{}",
        host,
        port
    );

    if cmd.fetch_on_start {
        let total = coordinator
            .start_refresh()
            .context("Failed to start initial refresh")?;
        tracing::info!(total, "Initial refresh started");
    }

    http::serve(coordinator, &host, port)
        .await
        .with_context(|| format!("Server on {}:{} failed", host, port))?;

    tracing::info!("Screener stopped");
    Ok(())
}

/// Handle scan command
async fn scan_command(cmd: ScanCmd, config: Config) -> Result<()> {
    let tickers = if cmd.tickers.is_empty() {
        config.tickers()
    } else {
        cmd.tickers
            .iter()
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
            .collect()
    };

    let coordinator = build_coordinator(&config, tickers)?;
    tracing::info!("Fetching {} tickers...", coordinator.universe().len());

    let report = coordinator
        .refresh_now()
        .await
        .context("Refresh could not start")?;

    if report.loaded == 0 {
        bail!(
            "No price history could be fetched ({} tickers failed)",
            report.failed()
        );
    }

    let outcome = coordinator
        .analyze(AnalyzeRequest {
            min_z: cmd.min_z,
            top_n: cmd.top_n,
            policy: cmd.policy,
        })
        .context("Analysis failed")?;

    match cmd.format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => print_table(&outcome, report.loaded, report.failed()),
    }

    Ok(())
}

fn print_json(outcome: &RankingOutcome) -> Result<()> {
    let results: Vec<AnalysisPayload> = outcome.candidates.iter().map(AnalysisPayload::from).collect();
    let body = serde_json::json!({
        "count": results.len(),
        "candidates_found": outcome.candidates_found,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn print_table(outcome: &RankingOutcome, loaded: usize, failed: usize) {
    println!(
        "Loaded {} series ({} failed), {} analyzed, {} candidates found",
        loaded, failed, outcome.analyzed, outcome.candidates_found
    );

    if outcome.candidates.is_empty() {
        println!("No candidates.");
        return;
    }

    println!();
    println!(
        "{:<4} {:<7} {:<28} {:>10} {:>7} {:>6} {:>7} {:>6} {:>6} {:<9} {:<5}",
        "#", "TICKER", "NAME", "PRICE", "Z", "RSI", "PROB", "HL", "DAYS", "SIGNAL", "DIR"
    );
    for (i, candidate) in outcome.candidates.iter().enumerate() {
        let a = &candidate.analysis;
        let name: String = a.display_name.chars().take(28).collect();
        println!(
            "{:<4} {:<7} {:<28} {:>10.2} {:>7.2} {:>6.1} {:>6.1}% {:>6.1} {:>6.1} {:<9} {:<5}",
            i + 1,
            a.ticker,
            name,
            a.current_price,
            a.z_score,
            a.rsi,
            a.reversion_probability * 100.0,
            a.half_life,
            a.expected_days_to_revert,
            a.signal_strength,
            a.direction
        );
    }
}
