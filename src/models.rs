//! Data models for NewsAPI responses.
//!
//! This module defines the wire types returned by the upstream service:
//! - [`Article`]: One news record as delivered by the API
//! - [`ArticleSource`]: The nested `source` object of an article
//! - [`ArticlesPage`]: One page of results (or an error body)
//!
//! Every field is optional. The upstream regularly sends `null` for
//! authors and descriptions, and redacted records carry placeholder text
//! instead of content, so nothing here is allowed to fail deserialization
//! because a field is missing.

use serde::{Deserialize, Deserializer, Serialize};

/// A single news article as returned by the `everything` and
/// `top-headlines` endpoints.
///
/// Field names follow the upstream JSON schema (`publishedAt`), the Rust
/// side uses snake_case.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline of the article.
    #[serde(default)]
    pub title: Option<String>,
    /// Short teaser text.
    #[serde(default)]
    pub description: Option<String>,
    /// Byline, frequently absent.
    #[serde(default)]
    pub author: Option<String>,
    /// The publisher of the article.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub source: ArticleSource,
    /// Canonical link to the full story.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication timestamp, kept as the raw ISO 8601 string.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Name of the publishing source, if the upstream supplied one.
    pub fn source_name(&self) -> Option<&str> {
        self.source.name.as_deref()
    }
}

/// The `source` object nested in every article.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ArticleSource {
    /// Source identifier such as `bbc-news`; `null` for many publishers.
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable source name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One response body from the upstream API.
///
/// Successful bodies carry `articles` and `totalResults`; error bodies carry
/// `code` and `message` instead. Both shapes decode into this struct.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPage {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Treat an explicit JSON `null` like a missing field.
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
