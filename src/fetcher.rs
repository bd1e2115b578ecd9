//! Page-by-page collection of articles.
//!
//! [`Fetcher::fetch_articles`] keeps requesting pages until it holds
//! `count` visible articles or the upstream runs dry:
//!
//! 1. Derive the request for the current page (see [`crate::query`])
//! 2. Stop on a non-success status, keeping what was already collected
//! 3. Drop removed articles and append the rest
//! 4. Stop when the raw page came back shorter than `pageSize`
//! 5. Advance the page cursor (`everything` only) and repeat
//!
//! Pages are requested strictly one after another.

use tracing::{debug, error, info, instrument};

use crate::command::CommandDescriptor;
use crate::config::NewsApiConfig;
use crate::error::Error;
use crate::filter::retain_visible;
use crate::models::{Article, ArticlesPage};
use crate::query::build_request;
use crate::transport::Transport;
use crate::utils::truncate_for_log;

/// Runs the pagination loop against a [`Transport`].
#[derive(Debug)]
pub struct Fetcher<'a, T> {
    transport: T,
    config: &'a NewsApiConfig,
}

impl<'a, T> Fetcher<'a, T>
where
    T: Transport,
{
    pub fn new(transport: T, config: &'a NewsApiConfig) -> Self {
        Self { transport, config }
    }

    /// Collect up to `descriptor.count` visible articles.
    ///
    /// Upstream error statuses and undecodable bodies end the loop early and
    /// the partial result is returned as `Ok`. Only a transport failure,
    /// where no response arrived at all, is an `Err`.
    ///
    /// `top-headlines` has no page cursor, so a `category` fetch never goes
    /// past the first page.
    #[instrument(level = "info", skip_all, fields(kind = %descriptor.kind, count = descriptor.count))]
    pub async fn fetch_articles(
        &self,
        descriptor: &CommandDescriptor,
    ) -> Result<Vec<Article>, Error> {
        let mut articles: Vec<Article> = Vec::new();
        let mut page = 1usize;

        while articles.len() < descriptor.count {
            let request = build_request(descriptor, page, &self.config.api_key);
            let response = self.transport.get(&request.to_url(self.config)).await?;

            if !response.is_success() {
                // Error bodies carry a code and message; anything else is logged bare.
                let upstream: ArticlesPage =
                    serde_json::from_str(&response.body).unwrap_or_default();
                error!(
                    status = response.status,
                    page,
                    code = upstream.code.as_deref().unwrap_or(""),
                    upstream_message = upstream.message.as_deref().unwrap_or(""),
                    "Error fetching news"
                );
                break;
            }

            let parsed = match serde_json::from_str::<ArticlesPage>(&response.body) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!(
                        page,
                        error = %e,
                        body_preview = %truncate_for_log(&response.body, 200),
                        "Could not decode page"
                    );
                    break;
                }
            };

            let total_results = parsed.total_results;
            let raw_len = parsed.articles.len();
            let visible = retain_visible(parsed.articles);
            debug!(
                page,
                endpoint = request.endpoint.name(),
                total_results,
                raw = raw_len,
                kept = visible.len(),
                "Fetched page"
            );
            articles.extend(visible);

            if raw_len < request.page_size() {
                debug!(page, "Upstream exhausted");
                break;
            }
            if !request.endpoint.paginates() {
                debug!(endpoint = request.endpoint.name(), "Endpoint is single-page");
                break;
            }
            page += 1;
        }

        articles.truncate(descriptor.count);
        info!(collected = articles.len(), last_page = page, "Finished fetching");
        Ok(articles)
    }
}
