// ABOUTME: Command-line entry point for the job board client
// ABOUTME: Fetches the feed, applies filters and prints rendered HTML or stats

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use jobboard_client::board::page::{GridView, SearchForm};
use jobboard_client::{BoardConfig, JobBoardClient};

#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version)]
#[command(about = "Browse a job board feed from the terminal")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the job board server (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch jobs, apply facet filters and write the rendered page
    Fetch {
        #[command(flatten)]
        search: SearchArgs,

        /// Employment type to keep (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Exact location to keep (repeatable)
        #[arg(long = "in")]
        locations: Vec<String>,

        /// Company to keep (repeatable)
        #[arg(long = "company")]
        companies: Vec<String>,

        /// Write the page here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show the detail view for the card at INDEX
    Show {
        index: usize,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print summary statistics for the feed
    Stats {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Title or company search text, matched by the server
    #[arg(long, short, default_value = "")]
    query: String,

    /// Location search text, matched by the server
    #[arg(long, short, default_value = "")]
    location: String,
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    Ok(config)
}

/// Fetch and fail loudly when the grid ends in the error state.
async fn fetch(board: &JobBoardClient, search: &SearchArgs) -> Result<()> {
    board.fetch_jobs(&search.query, &search.location).await;
    if let GridView::Error { message, .. } = board.page().await.grid {
        anyhow::bail!("Failed to fetch jobs from {}: {}", board.config().api_base_url, message);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let board = JobBoardClient::new(config).context("Failed to create job board client")?;

    match cli.command {
        Commands::Fetch {
            search,
            types,
            locations,
            companies,
            out,
        } => {
            fetch(&board, &search).await?;

            let mut form = SearchForm {
                search_text: search.query.clone(),
                location_text: search.location.clone(),
                ..SearchForm::default()
            };
            form.facets.types.extend(types);
            form.facets.locations.extend(locations);
            form.facets.companies.extend(companies);
            if !form.facets.is_empty() {
                board.run_filter(form).await;
            }

            let html = board.render_page().await.context("Failed to render page")?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "page written");
                }
                None => println!("{}", html),
            }
        }
        Commands::Show { index, search } => {
            fetch(&board, &search).await?;
            let reference = board
                .view_details_at(index)
                .await
                .with_context(|| format!("No job card at index {}", index))?;
            tracing::info!(%reference, "opened job details");
            println!("{}", board.page().await.modal.html);
        }
        Commands::Stats { search } => {
            fetch(&board, &search).await?;
            let stats = board.page().await.stats;
            println!("Total jobs:        {}", stats.total);
            println!(
                "Top location:      {}",
                stats.top_location.as_deref().unwrap_or("")
            );
            println!("Trending category: {}", stats.trending_category);
        }
    }

    Ok(())
}
