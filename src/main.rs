use atelier_core::config::Config;
use atelier_core::SearchService;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atelier", about = "Atelier — storefront search and sales tools")]
struct Cli {
    /// Config file to use instead of ~/.config/atelier/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search collections and products; prints the result as JSON.
    Search {
        /// Free-text query. Empty lists everything.
        #[arg(default_value = "")]
        query: String,
        /// JSON catalog file.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Gallery root whose sub-directories become collections.
        #[arg(long)]
        images: Option<PathBuf>,
        /// Log the de-duplicated images of the matched collections.
        #[arg(long)]
        preload: bool,
    },
    /// Print canned search suggestions.
    Suggest {
        #[arg(default_value = "")]
        query: String,
    },
    /// Print monthly revenue from the catalog's orders.
    Sales {
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Show all twelve months of this year.
        #[arg(long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config: falling back to defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Search {
            query,
            catalog,
            images,
            preload,
        } => {
            let catalog = catalog.or_else(|| config.catalog.path.clone());
            let images = images.or_else(|| config.catalog.images.clone());
            let (store, _) = atelier::load_sources(catalog.as_deref(), images.as_deref()).await?;
            let service = SearchService::new(store);
            println!("{}", atelier::search(&service, &query, preload)?);
        }
        Command::Suggest { query } => {
            println!("{}", atelier::suggest(&config.suggester(), &query));
        }
        Command::Sales { catalog, year } => {
            let catalog = catalog.or_else(|| config.catalog.path.clone());
            let (_, orders) = atelier::load_sources(catalog.as_deref(), None).await?;
            println!("{}", atelier::sales(&orders, year));
        }
    }
    Ok(())
}
