//! moviedex - movie search CLI backed by the TMDB API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use moviedex_api::tmdb::{LocalMovieApi, MovieRecord, TmdbClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search movies by free text.
    Search(SearchArgs),
    /// List movies ordered by descending popularity.
    Popular,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "inception").
    query: String,
}

/// Builds a `TmdbClient` from the `TMDB_API_TOKEN` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set or the client fails to build.
#[instrument(skip_all)]
fn build_client() -> Result<TmdbClient> {
    TmdbClient::from_env(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ))
    .context("failed to build TMDB client")
}

/// Logs one line per record plus a result count.
fn print_records(records: &[MovieRecord]) {
    tracing::info!("Results: {}", records.len());
    tracing::info!("ID\tTitle\t\t\tReleaseDate\tVoteAvg");
    for record in records {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            record
                .id()
                .map_or_else(|| String::from("-"), |id| id.to_string()),
            record.title().unwrap_or("-"),
            record.release_date().unwrap_or("-"),
            record
                .vote_average()
                .map_or_else(|| String::from("-"), |avg| format!("{avg:.1}")),
        );
    }
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs) -> Result<()> {
    let client = build_client()?;

    let records = client
        .search(Some(&args.query))
        .await
        .context("TMDB search/movie request failed")?;

    print_records(&records);

    Ok(())
}

/// Runs the `popular` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_popular() -> Result<()> {
    let client = build_client()?;

    let records = client
        .search(None)
        .await
        .context("TMDB discover/movie request failed")?;

    print_records(&records);

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args).await,
        Commands::Popular => run_popular().await,
    }
}
