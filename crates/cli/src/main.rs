#![allow(clippy::print_stdout, reason = "CLI output goes to stdout")]

mod commands;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use bookstall_core::env_non_empty;
use bookstall_storage::StorageBackend;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookstall")]
#[command(
    about = "Online bookstore backend with synthetic prices, ratings and likes",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "3001")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Search the catalog and print normalized results
    Search {
        query: String,
        /// Treat the query as a subject shelf
        #[arg(short, long, conflicts_with = "author")]
        subject: bool,
        /// Treat the query as an author name
        #[arg(short, long)]
        author: bool,
        #[arg(short = 'n', long)]
        max_results: Option<u32>,
    },
    /// Print the attributes for a book, creating them if needed
    Attributes { id: String },
    /// Add a user to a book's likes
    Like { id: String, user: String },
    /// Remove a user from a book's likes
    Unlike { id: String, user: String },
}

pub(crate) fn get_db_path() -> PathBuf {
    env_non_empty("BOOKSTALL_DB_PATH").map_or_else(
        || {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bookstall")
                .join("bookstall.db")
        },
        PathBuf::from,
    )
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set and the feature is compiled in,
/// otherwise the SQLite file.
pub(crate) async fn open_storage() -> Result<Arc<StorageBackend>> {
    #[cfg(feature = "postgres")]
    if let Some(url) = env_non_empty("DATABASE_URL") {
        let backend = StorageBackend::new_postgres(&url).await?;
        tracing::info!("Using PostgreSQL storage");
        return Ok(Arc::new(backend));
    }

    #[cfg(not(feature = "postgres"))]
    if env_non_empty("DATABASE_URL").is_some() {
        tracing::warn!("DATABASE_URL is set but postgres support is not compiled in, using SQLite");
    }

    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(Arc::new(StorageBackend::new_sqlite(&db_path)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Search { query, subject, author, max_results } => {
            commands::search::run_search(&query, subject, author, max_results).await?;
        },
        Commands::Attributes { id } => commands::attributes::run_attributes(&id).await?,
        Commands::Like { id, user } => commands::attributes::run_like(&id, &user).await?,
        Commands::Unlike { id, user } => commands::attributes::run_unlike(&id, &user).await?,
    }

    Ok(())
}
