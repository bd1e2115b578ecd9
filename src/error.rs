//! Error type shared by the query, transport and CLI layers.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures that stop a command before or while talking to the upstream.
///
/// Upstream non-success statuses are deliberately absent: the fetcher logs
/// them and returns the articles collected so far.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured endpoint is not a usable base URL.
    #[error("invalid {endpoint} endpoint url: {source}")]
    InvalidEndpointUrl {
        endpoint: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build the http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("failed to execute the request: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("failed to read the response body: {0}")]
    Body(#[source] reqwest::Error),

    /// No credential was supplied for a command that talks to the API.
    #[error("no API key configured; set API_KEY or pass --api-key")]
    MissingApiKey,

    /// A date in `--date` is not `YYYY-MM-DD`.
    #[error("invalid date {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// `--date` had more than two comma separated parts.
    #[error("invalid date range {0:?}, expected FROM,TO")]
    MalformedDateRange(String),

    /// `--date` starts after it ends.
    #[error("date range starts after it ends: {from} > {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },
}
