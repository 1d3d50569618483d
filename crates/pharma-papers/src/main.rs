//! get-papers-list - Entry Point
//!
//! Searches PubMed and lists papers with pharmaceutical/biotech company
//! authors, either as a console table or as a CSV file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pharma_papers::config::api;
use pharma_papers::formatters::{format_table, write_csv};
use pharma_papers::{ClientError, Config, PubMedClient, processor};

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(about = "Fetch PubMed papers and identify those with pharmaceutical/biotech company authors")]
#[command(version)]
#[command(after_help = "Examples:
  get-papers-list \"cancer treatment\"
  get-papers-list \"diabetes[MeSH Terms]\" --file results.csv
  get-papers-list \"immunotherapy\" --debug --max-results 50")]
struct Cli {
    /// Search query using PubMed syntax (e.g. "cancer treatment[Title/Abstract]")
    query: String,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,

    /// Save results to this CSV file instead of printing them
    #[arg(short, long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of papers to fetch
    #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Contact email sent to NCBI (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// NCBI API key (optional, enables higher rate limits)
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(debug: bool, json: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::new(cli.email.clone(), cli.api_key.clone());
    let client = PubMedClient::new(config)?;

    let summary = processor::fetch_filtered_papers(&client, &cli.query, cli.max_results).await?;

    if summary.found == 0 {
        println!("No papers found for the given query.");
        return Ok(());
    }

    let rows = processor::to_rows(&summary.papers);

    match &cli.file {
        Some(path) => {
            write_csv(path, &rows)?;
            println!("Results saved to {}", path.display());
        }
        None => println!("{}", format_table(&rows)),
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.debug, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting get-papers-list");

    let Err(e) = run(&cli).await else {
        return ExitCode::SUCCESS;
    };

    if let Some(api_error) = e.downcast_ref::<ClientError>() {
        tracing::error!(error = %api_error, "PubMed API error");
        eprintln!("Error: {api_error}");
    } else {
        tracing::error!(error = %e, "Unexpected error");
        if cli.debug {
            eprintln!("Unexpected error: {e:?}");
        } else {
            eprintln!("Unexpected error: {e}");
        }
    }

    ExitCode::FAILURE
}
