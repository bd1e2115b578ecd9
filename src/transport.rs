//! HTTP transport for the upstream API.
//!
//! The fetcher only needs "GET this URL, give me status and body", so that
//! is all the [`Transport`] trait asks for:
//! - [`Transport`]: the seam the fetch loop is generic over
//! - [`HttpTransport`]: the `reqwest` implementation used by the binary
//!
//! Status codes are passed through untouched. Deciding what a non-success
//! status means is the caller's business.

use std::time::Instant;

use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::NewsApiConfig;
use crate::error::Error;

/// Status code the upstream uses for a successful page.
pub const STATUS_OK: u16 = 200;

/// Raw outcome of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Something that can perform a GET request.
pub trait Transport {
    /// Issue a GET for `url` and return the status code and body.
    ///
    /// An `Err` means no HTTP response was obtained at all.
    async fn get(&self, url: &Url) -> Result<TransportResponse, Error>;
}

impl<T: Transport> Transport for &T {
    async fn get(&self, url: &Url) -> Result<TransportResponse, Error> {
        (**self).get(url).await
    }
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client honouring the configured timeout.
    ///
    /// The upstream rejects requests without a `User-Agent`, so the crate
    /// name and version are always sent.
    pub fn new(config: &NewsApiConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    // The query string carries the API key; only the path is recorded.
    #[instrument(level = "debug", skip_all, fields(path = %url.path()))]
    async fn get(&self, url: &Url) -> Result<TransportResponse, Error> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(elapsed_ms = t0.elapsed().as_millis(), error = %e, "Request failed");
                Error::Request(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Body)?;
        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Received response"
        );

        Ok(TransportResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header_exists, method, path, query_param},
    };

    fn config_for(server: &MockServer) -> NewsApiConfig {
        NewsApiConfig::with_endpoints(
            "test-key",
            &format!("{}/v2/everything", server.uri()),
            &format!("{}/v2/top-headlines", server.uri()),
        )
        .unwrap()
    }

    #[test]
    fn test_is_success() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(!TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(429, "").is_success());
    }

    #[tokio::test]
    async fn test_http_transport_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "rust"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let transport = HttpTransport::new(&config).unwrap();
        let mut url = config.everything_url.clone();
        url.query_pairs_mut().append_pair("q", "rust");

        let response = transport.get(&url).await.unwrap();
        assert_eq!(response, TransportResponse::new(200, r#"{"status":"ok"}"#));
    }

    #[tokio::test]
    async fn test_http_transport_passes_error_status_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(426).set_body_string("upgrade"))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let transport = HttpTransport::new(&config).unwrap();

        let response = transport.get(&config.top_headlines_url).await.unwrap();
        assert_eq!(response.status, 426);
        assert_eq!(response.body, "upgrade");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_http_transport_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = config_for(&server).with_timeout(Duration::from_millis(100));
        let transport = HttpTransport::new(&config).unwrap();

        let result = transport.get(&config.everything_url).await;
        assert!(matches!(result, Err(Error::Request(_))));
    }
}
