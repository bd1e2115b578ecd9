//! JSON output of the fetched articles.
//!
//! Used by `--json`. Articles are written with the upstream field names so
//! the output can be fed back into tools that already speak the API schema.

use serde::Serialize;

use crate::command::CommandKind;
use crate::models::Article;

/// Envelope written to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDump<'a> {
    pub command: &'a str,
    pub keyword: Option<&'a str>,
    pub total_results: usize,
    pub articles: &'a [Article],
}

/// Pretty-print `articles` as a JSON document.
pub fn render_json(
    kind: CommandKind,
    keyword: Option<&str>,
    articles: &[Article],
) -> Result<String, serde_json::Error> {
    let dump = ArticleDump {
        command: kind.as_str(),
        keyword,
        total_results: articles.len(),
        articles,
    };
    serde_json::to_string_pretty(&dump)
}
