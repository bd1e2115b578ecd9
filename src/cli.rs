//! Command-line interface definitions.
//!
//! This module defines the subcommands and options using the `clap` crate
//! and turns a parsed invocation into a [`CommandDescriptor`] and a
//! [`NewsApiConfig`]. Connection options can come from flags or from the
//! environment (a `.env` file is loaded by `main` before parsing).

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::command::{CommandDescriptor, CommandKind, DateRange, SortMode};
use crate::config::{
    DEFAULT_EVERYTHING_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_HEADLINES_URL, NewsApiConfig,
};
use crate::error::Error;

/// Command-line arguments for the news client.
///
/// # Examples
///
/// ```sh
/// # Five trending technology stories
/// news trend
///
/// # Newest ten stories about rust, titles only
/// news search rust -n 10 -u -b
///
/// # One day of BBC News
/// news source bbc-news -d 2024-10-17
/// ```
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "CLI for searching news articles",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// NewsAPI key
    #[arg(long, env = "API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the `everything` endpoint
    #[arg(long, env = "NEWS_EVERYTHING_URL", global = true, default_value = DEFAULT_EVERYTHING_URL)]
    pub everything_url: String,

    /// Base URL of the `top-headlines` endpoint
    #[arg(long, env = "NEWS_TOP_HEADLINES_URL", global = true, default_value = DEFAULT_TOP_HEADLINES_URL)]
    pub top_headlines_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "NEWS_TIMEOUT_SECS", global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the articles as JSON instead of a listing
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get trending news.
    Trend(TrendArgs),
    /// Search news articles by keyword.
    Search(QueryArgs),
    /// Search news articles by category.
    Category(QueryArgs),
    /// Search news articles by source.
    Source(QueryArgs),
    /// List the available types of data.
    List,
    /// Show detailed information about all subcommands.
    Help,
}

/// Options shared by every fetching subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Number of news articles to display.
    #[arg(short, long, default_value_t = 5)]
    pub num: usize,

    /// Date or date range to search (format: YYYY-MM-DD or YYYY-MM-DD,YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<DateRange>,

    /// Show only title and description.
    #[arg(short, long)]
    pub brief: bool,
}

#[derive(Args, Debug)]
pub struct TrendArgs {
    /// Keyword to search news articles (default: technology).
    pub keyword: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Keyword, category or source identifier to search for.
    pub keyword: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Sort by latest date first. Wins over --relevance.
    #[arg(short, long)]
    pub uptodate: bool,

    /// Sort by most relevant.
    #[arg(short, long)]
    pub relevance: bool,
}

impl Command {
    /// The fetch described by this subcommand; `None` for `list` and `help`.
    pub fn descriptor(&self) -> Option<CommandDescriptor> {
        let (kind, args) = match self {
            Self::Trend(args) => {
                return Some(
                    CommandDescriptor::new(CommandKind::Trend, args.keyword.clone(), args.common.num)
                        .with_date_range(args.common.date)
                        .with_brief(args.common.brief),
                );
            }
            Self::Search(args) => (CommandKind::Search, args),
            Self::Category(args) => (CommandKind::Category, args),
            Self::Source(args) => (CommandKind::Source, args),
            Self::List | Self::Help => return None,
        };

        Some(
            CommandDescriptor::new(kind, Some(args.keyword.clone()), args.common.num)
                .with_date_range(args.common.date)
                .with_sort_mode(SortMode::from_flags(args.uptodate, args.relevance))
                .with_brief(args.common.brief),
        )
    }
}

impl Cli {
    /// Connection settings for a fetching subcommand.
    ///
    /// Fails when no non-empty API key was given.
    pub fn config(&self) -> Result<NewsApiConfig, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(
            NewsApiConfig::with_endpoints(api_key, &self.everything_url, &self.top_headlines_url)?
                .with_timeout(Duration::from_secs(self.timeout_secs)),
        )
    }
}
