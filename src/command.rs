//! The normalized command model handed from the CLI to the fetcher.
//!
//! The CLI resolves every flag into a [`CommandDescriptor`] once; nothing
//! downstream inspects raw arguments again.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;

/// Which kind of listing the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Trending news, keyword optional.
    Trend,
    /// Free text search.
    Search,
    /// Top headlines matching a keyword.
    Category,
    /// Everything published by one source identifier.
    Source,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Search => "search",
            Self::Category => "category",
            Self::Source => "source",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering requested from the upstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Let the upstream decide.
    #[default]
    None,
    /// Newest first.
    MostRecent,
    /// Most relevant to the query first.
    MostRelevant,
}

impl SortMode {
    /// Resolve the `--uptodate` / `--relevance` flag pair.
    ///
    /// Recency is checked first, so passing both yields [`SortMode::MostRecent`].
    pub fn from_flags(uptodate: bool, relevance: bool) -> Self {
        if uptodate {
            Self::MostRecent
        } else if relevance {
            Self::MostRelevant
        } else {
            Self::None
        }
    }
}

/// Inclusive publication date window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// A one-day window.
    pub fn single(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, Error> {
        if from > to {
            return Err(Error::InvertedDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from_param(&self) -> String {
        self.from.format(Self::FORMAT).to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format(Self::FORMAT).to_string()
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, Error> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DateRange::FORMAT).map_err(|source| Error::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Parses `YYYY-MM-DD` or `YYYY-MM-DD,YYYY-MM-DD`.
impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [day] => Ok(Self::single(parse_day(day)?)),
            [from, to] => Self::new(parse_day(from)?, parse_day(to)?),
            _ => Err(Error::MalformedDateRange(s.to_string())),
        }
    }
}

/// Everything the fetcher needs to know about one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    /// Search text, or the exact source identifier for [`CommandKind::Source`].
    pub keyword: Option<String>,
    /// Number of valid articles wanted. Zero means nothing is fetched.
    pub count: usize,
    pub date_range: Option<DateRange>,
    pub sort_mode: SortMode,
    /// Only affects rendering.
    pub brief: bool,
}

impl CommandDescriptor {
    pub fn new(kind: CommandKind, keyword: Option<String>, count: usize) -> Self {
        Self {
            kind,
            keyword,
            count,
            date_range: None,
            sort_mode: SortMode::None,
            brief: false,
        }
    }

    #[must_use]
    pub fn with_date_range(mut self, date_range: Option<DateRange>) -> Self {
        self.date_range = date_range;
        self
    }

    #[must_use]
    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    #[must_use]
    pub fn with_brief(mut self, brief: bool) -> Self {
        self.brief = brief;
        self
    }
}
