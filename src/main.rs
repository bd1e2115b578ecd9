//! # News CLI
//!
//! A terminal client for the NewsAPI aggregation service. It turns a
//! subcommand into upstream query parameters, pages through the results
//! until enough articles are collected, drops redacted entries, and prints
//! a numbered listing.
//!
//! ## Usage
//!
//! ```sh
//! news trend
//! news search rust -n 10 -u
//! news category business -b
//! news source bbc-news -d 2024-10-01,2024-10-07
//! news list
//! news help
//! ```
//!
//! ## Architecture
//!
//! One invocation is one pass through:
//! 1. **Parsing**: CLI flags become a [`command::CommandDescriptor`]
//! 2. **Querying**: [`query::build_request`] derives each page request
//! 3. **Fetching**: [`fetcher::Fetcher`] pages until the count is met
//! 4. **Output**: [`outputs`] renders the listing or JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod command;
mod config;
mod error;
mod fetcher;
mod filter;
mod models;
mod outputs;
mod query;
mod transport;
mod utils;

use cli::{Cli, Command};
use command::CommandDescriptor;
use fetcher::Fetcher;
use outputs::{guide, json, listing};
use transport::HttpTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal; anything else is worth a warning once logging is up.
    let dotenv = dotenvy::dotenv();

    // --- Tracing init ---
    // Logs go to stderr so stdout carries only the listing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to load .env file");
        }
    }

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(command = ?args.command, json = args.json, "Parsed CLI arguments");

    match &args.command {
        None | Some(Command::Help) => print!("{}", guide::SUBCOMMANDS),
        Some(Command::List) => print!("{}", guide::DATA_TYPES),
        Some(command) => {
            if let Some(descriptor) = command.descriptor() {
                run(&args, &descriptor).await?;
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Fetch the articles for `descriptor` and print them.
#[instrument(level = "info", skip_all, fields(kind = %descriptor.kind))]
async fn run(args: &Cli, descriptor: &CommandDescriptor) -> Result<(), Box<dyn Error>> {
    let config = args.config().inspect_err(|e| {
        error!(error = %e, "Cannot build API configuration");
    })?;
    debug!(?config, "Loaded configuration");

    let transport = HttpTransport::new(&config)?;
    let fetcher = Fetcher::new(transport, &config);
    let articles = fetcher.fetch_articles(descriptor).await?;

    let rendered = if args.json {
        json::render_json(descriptor.kind, descriptor.keyword.as_deref(), &articles)?
    } else {
        listing::render_listing(&articles, descriptor.brief)
    };
    print!("{rendered}");

    Ok(())
}
