use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{SearchController, SnuttProxyClient};
use shared::{
    domain::SearchMode,
    protocol::{SearchOutcome, SearchQuery, SearchRequest},
};
use timetable::{parse_records, search_events};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "ttuns", about = "Professor and lecture-room timetables")]
struct Cli {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one term from the backend proxy and lay out the matches.
    Search {
        #[arg(long, default_value_t = SearchMode::Room)]
        mode: SearchMode,
        #[arg(long)]
        query: String,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        backend_url: Option<String>,
    },
    /// Lay out a saved search response without touching the network.
    Layout {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value_t = SearchMode::Room)]
        mode: SearchMode,
        #[arg(long)]
        query: String,
    },
    /// Print the effective settings.
    Config,
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
    let settings = load_settings();

    let (outcome, mode) = match cli.command {
        Command::Search {
            mode,
            query,
            year,
            semester,
            backend_url,
        } => {
            let backend = backend_url.unwrap_or_else(|| settings.backend_base.clone());
            let client = SnuttProxyClient::with_timeout(&backend, settings.request_timeout())
                .with_context(|| format!("failed to build client for '{backend}'"))?;
            info!("search endpoint={}", client.endpoint());

            let request = SearchRequest::new(
                SearchQuery {
                    year: year.unwrap_or(settings.default_year),
                    semester: semester.unwrap_or_else(|| settings.default_semester.clone()),
                },
                mode,
                query,
            );
            let controller = SearchController::new(Arc::new(client));
            let outcome = controller.search_and_wait(request).await?;
            (outcome, mode)
        }
        Command::Layout { file, mode, query } => {
            if query.trim().is_empty() {
                bail!("--query must not be blank");
            }
            let body = fs::read_to_string(&file)
                .with_context(|| format!("failed to read '{}'", file.display()))?;
            let records = parse_records(&body)
                .with_context(|| format!("failed to parse '{}'", file.display()))?;
            let outcome = SearchOutcome::from_events(search_events(&records, mode, &query));
            (outcome, mode)
        }
        Command::Config => {
            print!("{}", toml::to_string(&settings)?);
            return Ok(());
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{}", render::render_text(&outcome, mode)),
        OutputFormat::Json => println!("{}", render::render_json(&outcome)?),
    }

    Ok(())
}
