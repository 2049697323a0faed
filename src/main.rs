//! Trailhead - Main entrypoint.
//!
//! Command-line front end over the trail catalog. It loads configuration,
//! initializes logging, and runs one subcommand against the record store.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use trailhead_lib::catalog::browse::{BrowseCommand, BrowseOutcome, BrowseSession, BROWSE_HELP};
use trailhead_lib::catalog::render::{render_page, render_record};
use trailhead_lib::catalog::{
    Pages, SortOrder, TrailCatalog, TrailDraft, TrailField, TrailFilter, TrailRecord,
};
use trailhead_lib::config::{ConfigLoader, LogConfig, TrailheadConfig, ENV_PREFIX};
use trailhead_lib::error::{
    report_error, set_error_reporter, ErrorContext, TracingErrorReporter, TrailError, TrailResult,
};

/// Command line arguments for Trailhead.
#[derive(Parser, Debug)]
#[clap(name = "trailhead", version, author, about)]
struct Args {
    /// Path to configuration file (TOML or JSON)
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List every trail, sorted, one page at a time
    List {
        /// Field to sort by
        #[clap(long, value_enum, default_value_t = TrailField::Name)]
        sort: TrailField,

        /// Sort in descending order
        #[clap(long)]
        desc: bool,

        /// Page to show, starting at 1
        #[clap(long, default_value_t = 1)]
        page: usize,
    },

    /// Find trails matching every given criterion
    Search {
        /// Case-insensitive part of the trail name
        #[clap(long)]
        name: Option<String>,

        /// Exact distance in miles
        #[clap(long)]
        distance: Option<String>,

        /// Exact elevation gain in feet
        #[clap(long)]
        elevation: Option<String>,

        /// Exact difficulty
        #[clap(long)]
        difficulty: Option<String>,

        /// Page to show, starting at 1
        #[clap(long, default_value_t = 1)]
        page: usize,
    },

    /// Add or update a trail and append it to the record store
    Add {
        /// Trail name
        name: String,

        #[clap(long)]
        location: Option<String>,

        /// Distance in miles
        #[clap(long)]
        distance: Option<String>,

        /// Elevation gain in feet
        #[clap(long)]
        elevation: Option<String>,

        /// Difficulty from 1 to 3
        #[clap(long)]
        difficulty: Option<String>,

        /// Known trails to connect the new one to
        #[clap(long = "connect")]
        connect: Vec<String>,
    },

    /// Show one stored trail
    Show {
        /// Trail name
        name: String,

        /// Print the trail as JSON
        #[clap(long)]
        json: bool,
    },

    /// Page through the catalog interactively
    Browse {
        /// Field to sort by
        #[clap(long, value_enum, default_value_t = TrailField::Name)]
        sort: TrailField,

        /// Sort in descending order
        #[clap(long)]
        desc: bool,
    },

    /// Validate the configuration file and the record store
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level when it is set. Logs go to
/// stderr so listings on stdout stay clean.
fn init_logging(log: &LogConfig) -> TrailResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| TrailError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn sort_order(desc: bool) -> SortOrder {
    if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

/// Renders 1-based page `page` of `records`.
fn page_of(records: &[&TrailRecord], page_size: usize, page: usize) -> TrailResult<String> {
    let pages = Pages::new(records, page_size);
    let total = pages.total_pages().max(1);
    if page == 0 || page > total {
        return Err(TrailError::Custom(format!(
            "Page {page} is out of range (1-{total})"
        )));
    }
    Ok(render_page(&pages, page - 1))
}

fn browse(catalog: &TrailCatalog, field: TrailField, order: SortOrder) -> TrailResult<()> {
    let records = catalog.sorted(field, order)?;
    let mut session = BrowseSession::new(records, catalog.page_size());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", session.render_current());
    println!("{BROWSE_HELP}");

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, "Browse command");

        match session.apply(command) {
            BrowseOutcome::Show(text) => {
                print!("{text}");
                if !text.ends_with('\n') {
                    println!();
                }
            }
            BrowseOutcome::Quit => break,
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Runs one subcommand against a loaded configuration.
fn run(command: Command, config: &TrailheadConfig) -> TrailResult<()> {
    match command {
        Command::List { sort, desc, page } => {
            let catalog = TrailCatalog::open(&config.catalog)?;
            let records = catalog.sorted(sort, sort_order(desc))?;
            print!("{}", page_of(&records, catalog.page_size(), page)?);
        }
        Command::Search {
            name,
            distance,
            elevation,
            difficulty,
            page,
        } => {
            let mut filter = TrailFilter::new();
            if let Some(name) = name {
                filter = filter.with_name(&name);
            }
            if let Some(distance) = distance {
                filter = filter.with_distance(&distance)?;
            }
            if let Some(elevation) = elevation {
                filter = filter.with_elevation_gain(&elevation)?;
            }
            if let Some(difficulty) = difficulty {
                filter = filter.with_difficulty(&difficulty);
            }

            let catalog = TrailCatalog::open(&config.catalog)?;
            let records = catalog.search(&filter)?;
            print!("{}", page_of(&records, catalog.page_size(), page)?);
        }
        Command::Add {
            name,
            location,
            distance,
            elevation,
            difficulty,
            connect,
        } => {
            let mut catalog = TrailCatalog::open(&config.catalog)?;
            let draft = TrailDraft {
                location,
                distance,
                elevation_gain: elevation,
                difficulty,
            };
            let record = catalog.submit(&name, draft)?;
            for other in &connect {
                if catalog.get(other).is_none() {
                    info!(trail = %other, "Skipping connection to unknown trail");
                }
                catalog.connect(&record.name, other);
            }

            let node = catalog.graph().get_trail(&record.name);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "name": record.name, "trail": node }))?
            );
        }
        Command::Show { name, json } => {
            let catalog = TrailCatalog::open(&config.catalog)?;
            let record = catalog
                .get(&name)
                .ok_or_else(|| TrailError::Custom(format!("No trail named {name:?}")))?;

            // Connections are not persisted, so only the record is shown
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print!("{}", render_record(record));
            }
        }
        Command::Browse { sort, desc } => {
            let catalog = TrailCatalog::open(&config.catalog)?;
            browse(&catalog, sort, sort_order(desc))?;
        }
        Command::Validate => {
            let catalog = TrailCatalog::open(&config.catalog)?;
            // Sorting by each numeric field surfaces malformed values
            for field in TrailField::ALL {
                catalog.sorted(field, SortOrder::Ascending)?;
            }
            println!(
                "Configuration is valid; {} trail(s) in {}",
                catalog.len(),
                config.catalog.data_file.display()
            );
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = TrailheadConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| TrailError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            println!("Default configuration written to {}", output.display());
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = config_loader
        .load()
        .context("Failed to load configuration")?;

    init_logging(&config.log).context("Failed to initialize logging")?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    debug!(?config, "Configuration loaded");

    let component = format!("{:?}", args.command)
        .split_whitespace()
        .next()
        .unwrap_or("command")
        .to_lowercase();

    if let Err(error) = run(args.command, &config) {
        let context = ErrorContext::new(error, component);
        report_error(&context);
        return Err(anyhow::Error::new(context.error));
    }
    Ok(())
}
