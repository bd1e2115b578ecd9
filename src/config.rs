//! Connection settings for the upstream API.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::Error;

pub const DEFAULT_EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Immutable configuration built once at startup and passed by reference to
/// the query builder and the transport.
#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub everything_url: Url,
    pub top_headlines_url: Url,
    pub timeout: Duration,
}

impl NewsApiConfig {
    /// Config for the given endpoint URLs, e.g. the public API, a proxy or a
    /// mock server.
    pub fn with_endpoints(
        api_key: impl Into<String>,
        everything_url: &str,
        top_headlines_url: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            api_key: api_key.into(),
            everything_url: parse_endpoint("everything", everything_url)?,
            top_headlines_url: parse_endpoint("top-headlines", top_headlines_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use = "dropped changed config"]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw).map_err(|source| Error::InvalidEndpointUrl { endpoint, source })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidEndpointUrl {
            endpoint,
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}

// Keeps the key out of logs.
impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &"<redacted>")
            .field("everything_url", &self.everything_url.as_str())
            .field("top_headlines_url", &self.top_headlines_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
