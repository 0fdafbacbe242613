//! CLI entry point for the tabela scraper.

use anyhow::Result;
use clap::Parser;
use tabela_core::{RequestOrchestrator, ScrapeResponse, ScraperConfig};
use tracing::debug;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Diagnostics go to stderr; stdout carries only the JSON envelope.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = ScraperConfig {
        login_url: args.login_url.clone(),
        table_url: args.table_url.clone(),
        log_path: args.log_file.clone(),
        ..ScraperConfig::default()
    };

    let orchestrator = RequestOrchestrator::new(config);
    let result = orchestrator
        .get_table_data(
            args.username.as_deref().unwrap_or(""),
            args.password.as_deref().unwrap_or(""),
        )
        .await;

    // The envelope shape is the contract: {"data": ...} or {"error": ...},
    // printed on success and failure alike. The exit code is extra signal
    // for shell callers, not a replacement for the envelope.
    let failed = result.is_err();
    let envelope = ScrapeResponse::from(result);
    println!("{}", serde_json::to_string(&envelope)?);

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
