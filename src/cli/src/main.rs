//! CLI for the portfolio site builder.
//!
//! Fetches the configured GitHub repositories and renders the static
//! portfolio page into an output directory.

use clap::Parser;
use portfolio_site::{BuildConfig, BuildError, BuildSummary, Builder};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Portfolio Site - Build a static portfolio page from selected GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site config file.
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Directory the generated site is written to.
    #[arg(long, default_value = "dist/")]
    out_dir: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Preview the page without writing files.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Only fails if a provider is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Build failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<BuildSummary, BuildError> {
    let mut config = BuildConfig::new(args.config, args.out_dir, args.dry_run);
    if let Some(token) = args.token {
        config = config.with_token(token);
    }
    if let Some(api_url) = args.api_url {
        config = config.with_api_base_url(api_url);
    }
    let builder = Builder::new(config)?;
    builder.build().await
}

/// Prints the final build summary.
fn print_summary(summary: &BuildSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Owner: {}", summary.owner);
    println!("  Projects requested: {}", summary.projects_requested);
    println!("  Repositories fetched: {}", summary.repositories_fetched);
    println!("  Total stars: {}", summary.total_stars);
    println!("  Total forks: {}", summary.total_forks);

    if !summary.dry_run {
        println!("  Files written: {}", summary.files_written.len());
    }
}
