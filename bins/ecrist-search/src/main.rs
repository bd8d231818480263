//! ecrist-search: query the Ecrist product catalog from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecrist_cli::output::{format_count, format_duration, print_product, Status};
use ecrist_search::{normalize, similarity, Catalog, ProductSearch};
use ecrist_telemetry::{metrics, Timer};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;

use config::Config;

/// Two-phase fuzzy search over the eco product catalog
#[derive(Parser)]
#[command(name = "ecrist-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "ECRIST_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog JSON file; overrides the config, defaults to the demo catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print collected metrics when done
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products by text and category
    Search {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        /// Category filter
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Maximum number of products to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Suggest alternate search terms
    Suggest {
        /// Query to find alternatives for
        query: String,
    },

    /// Show the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Score two texts against each other
    Similarity {
        /// First text
        a: String,
        /// Second text
        b: String,
    },

    /// List every product in the catalog
    Catalog,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let mut logging = config.schema.logging.clone();
    if cli.verbose {
        logging.log_level = "debug".to_string();
    }
    ecrist_telemetry::init_with_config(logging)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    let engine = ProductSearch::with_config(config.schema.search.clone())?;

    match cli.command {
        Commands::Search {
            query,
            category,
            limit,
        } => {
            let catalog = load_catalog(cli.catalog.as_ref().or(config.schema.catalog.path.as_ref()))?;
            run_search(&engine, &catalog, &query, category.as_deref(), limit, cli.json)?;
        }

        Commands::Suggest { query } => {
            let catalog = load_catalog(cli.catalog.as_ref().or(config.schema.catalog.path.as_ref()))?;
            let timer = Timer::start("suggest.ms");
            let suggestions = engine.suggest(catalog.records(), &query);
            timer.stop();
            metrics().increment("suggest.calls");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                Status::warning("No suggestions");
            } else {
                for suggestion in &suggestions {
                    println!("{}", suggestion);
                }
            }
        }

        Commands::Normalize { text } => {
            let normalized = normalize(&text);
            if cli.json {
                println!("{}", serde_json::json!({ "input": text, "normalized": normalized }));
            } else {
                println!("{}", normalized);
            }
        }

        Commands::Similarity { a, b } => {
            let (a, b) = (normalize(&a), normalize(&b));
            let score = similarity(&a, &b);
            if cli.json {
                println!("{}", serde_json::json!({ "a": a, "b": b, "score": score }));
            } else {
                println!("{:.2}", score);
            }
        }

        Commands::Catalog => {
            let catalog = load_catalog(cli.catalog.as_ref().or(config.schema.catalog.path.as_ref()))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog.records())?);
            } else {
                Status::header(&format_count(catalog.len(), "product", "products"));
                for (i, record) in catalog.records().iter().enumerate() {
                    print_product(i + 1, record);
                }
            }
        }
    }

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    Ok(())
}

fn run_search(
    engine: &ProductSearch,
    catalog: &Catalog,
    query: &str,
    category: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let timer = Timer::start("search.ms");
    let mut outcome = engine.search_detailed(catalog.records(), query, category);
    let elapsed = timer.stop();
    metrics().increment(&format!("search.{}", outcome.phase));

    if let Some(limit) = limit {
        outcome.records.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.records.is_empty() {
        Status::warning("No products found");
        let suggestions = engine.suggest(catalog.records(), query);
        if !suggestions.is_empty() {
            Status::info(&format!("Did you mean: {}", suggestions.join(", ")));
        }
        return Ok(());
    }

    Status::header(&format!(
        "{} ({} match, {})",
        format_count(outcome.records.len(), "product", "products"),
        outcome.phase,
        format_duration(elapsed)
    ));
    for (i, record) in outcome.records.iter().enumerate() {
        print_product(i + 1, record);
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::seed());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

    tracing::debug!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}
