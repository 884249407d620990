//! Course Search CLI
//!
//! Local execution entry point: serve the browser UI, or scrape and search
//! from the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use course_search::{
    error::Result,
    handler::{SearchQuery, handle_search},
    models::Config,
    pipeline::Aggregator,
    services::CategoryFilter,
};

/// Course Search - scrape, filter and fuzzy-search a course catalog
#[derive(Parser, Debug)]
#[command(
    name = "course-search",
    version,
    about = "Scrape, filter and fuzzy-search a course catalog"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the browser UI
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind (default: server.addr from config)
        #[arg(long)]
        addr: Option<String>,
    },

    /// Scrape the catalog once and print it
    Scrape {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit tab-separated values instead of JSON
        #[arg(long)]
        tsv: bool,
    },

    /// Scrape, then print suggestions and matching courses
    Search {
        /// Course type: all, free or paid
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Title text to search for
        query: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Using configuration from {}", cli.config.display());

    match cli.command {
        #[cfg(feature = "web")]
        Command::Serve { addr } => {
            config.validate()?;
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            let aggregator = Aggregator::from_config(&config)?;
            let state = course_search::web::AppState::new(aggregator, config.site.clone());
            course_search::web::serve(state, &addr).await?;
        }

        Command::Scrape { output, tsv } => {
            config.validate()?;
            let aggregator = Aggregator::from_config(&config)?;
            let catalog = aggregator.catalog().await;

            let rendered = if tsv {
                catalog.to_tsv()
            } else {
                serde_json::to_string_pretty(catalog.as_ref())?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    log::info!("Catalog saved to {}", path.display());
                }
                None => println!("{rendered}"),
            }

            if catalog.report.stop.is_failure() {
                log::warn!("Scrape stopped early: {:?}", catalog.report.stop);
            }
        }

        Command::Search { category, query } => {
            config.validate()?;
            let aggregator = Aggregator::from_config(&config)?;
            let catalog = aggregator.catalog().await;
            let view = handle_search(&catalog, &SearchQuery { category, q: query }, &config.site);

            if let Some(warning) = &view.warning {
                log::warn!("{}", warning);
            }
            if !view.suggestions.is_empty() {
                println!("Did you mean:");
                for suggestion in &view.suggestions {
                    println!("  - {suggestion}");
                }
            }
            if !view.message.is_empty() {
                println!("{}", view.message);
            }
            println!("{} ({} courses)", view.category.label(), view.courses.len());
            for course in &view.courses {
                println!(
                    "{} | {} | {} | {} | {}\n    {}",
                    course.title, course.category, course.stars, course.lessons, course.price,
                    course.url
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (site, crawler, selectors, cache, server)");
        }
    }

    Ok(())
}
