//! Per-page request derivation.
//!
//! [`build_request`] maps a [`CommandDescriptor`] and a page number onto one
//! of the two upstream query shapes. It is pure and is called afresh for
//! every page, so no parameter state leaks between iterations.
//!
//! | Kind       | Endpoint        | Parameters                                       |
//! |------------|-----------------|--------------------------------------------------|
//! | `trend`    | `everything`    | `q` (defaults to `technology`), paging, sort, dates |
//! | `search`   | `everything`    | `q`, paging, sort, dates                         |
//! | `source`   | `everything`    | `sources` instead of `q`, paging, sort, dates    |
//! | `category` | `top-headlines` | `q`, `pageSize` only                             |

use url::Url;

use crate::command::{CommandDescriptor, CommandKind, SortMode};
use crate::config::NewsApiConfig;

/// Keyword used by `trend` when the user gives none.
pub const DEFAULT_TREND_KEYWORD: &str = "technology";

/// The two upstream endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Everything,
    TopHeadlines,
}

impl Endpoint {
    pub fn for_kind(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Category => Self::TopHeadlines,
            CommandKind::Trend | CommandKind::Search | CommandKind::Source => Self::Everything,
        }
    }

    /// Whether this endpoint honours a `page` parameter.
    ///
    /// `top-headlines` is fetched as a single page.
    pub fn paginates(self) -> bool {
        matches!(self, Self::Everything)
    }

    pub fn base_url(self, config: &NewsApiConfig) -> &Url {
        match self {
            Self::Everything => &config.everything_url,
            Self::TopHeadlines => &config.top_headlines_url,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::TopHeadlines => "top-headlines",
        }
    }
}

/// One fully derived page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl PageRequest {
    /// Value of the first parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The page size sent upstream, used to detect exhaustion.
    pub fn page_size(&self) -> usize {
        self.param("pageSize")
            .and_then(|size| size.parse().ok())
            .unwrap_or_default()
    }

    /// Absolute URL with every parameter encoded into the query string.
    pub fn to_url(&self, config: &NewsApiConfig) -> Url {
        let mut url = self.endpoint.base_url(config).clone();
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())));
        url
    }
}

/// Derive the request for `page` (1-based).
pub fn build_request(descriptor: &CommandDescriptor, page: usize, api_key: &str) -> PageRequest {
    let endpoint = Endpoint::for_kind(descriptor.kind);
    let mut params = Vec::with_capacity(8);

    match endpoint {
        Endpoint::TopHeadlines => {
            if let Some(keyword) = &descriptor.keyword {
                params.push(("q", keyword.clone()));
            }
            params.push(("apiKey", api_key.to_string()));
            params.push(("pageSize", descriptor.count.to_string()));
        }
        Endpoint::Everything => {
            match (descriptor.kind, &descriptor.keyword) {
                (CommandKind::Source, Some(source)) => params.push(("sources", source.clone())),
                (CommandKind::Source, None) => {}
                (CommandKind::Trend, None) => params.push(("q", DEFAULT_TREND_KEYWORD.to_string())),
                (_, Some(keyword)) => params.push(("q", keyword.clone())),
                (_, None) => {}
            }
            params.push(("apiKey", api_key.to_string()));
            params.push(("pageSize", descriptor.count.to_string()));
            params.push(("page", page.to_string()));

            match descriptor.sort_mode {
                SortMode::MostRecent => params.push(("sortBy", "publishedAt".to_string())),
                SortMode::MostRelevant => params.push(("sortBy", "relevancy".to_string())),
                SortMode::None => {}
            }

            if let Some(range) = &descriptor.date_range {
                params.push(("from", range.from_param()));
                params.push(("to", range.to_param()));
            }
        }
    }

    PageRequest { endpoint, params }
}
