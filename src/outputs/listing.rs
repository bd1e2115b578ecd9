//! Human-readable article listing.
//!
//! # Output Shape
//!
//! ```text
//!
//! 1. Title: Rust 2024 ships
//!    Author: Jane Doe
//!    Description: A new edition
//!    Source: BBC News
//!    publishedAt: 2024-10-17T09:00:00Z
//!    URL: https://example.com/rust
//! ```
//!
//! In brief mode only the title and description lines are written.

use std::fmt::Write;

use crate::filter::retain_visible;
use crate::models::Article;

pub const NO_NEWS: &str = "No news available.";
pub const NO_RELEVANT_NEWS: &str = "No relevant news articles found.";

/// Render `articles` as a numbered listing.
///
/// Removed entries are filtered again here, so the listing is safe to use on
/// unfiltered input too.
pub fn render_listing(articles: &[Article], brief: bool) -> String {
    if articles.is_empty() {
        return format!("{NO_NEWS}\n");
    }

    let visible = retain_visible(articles.to_vec());
    if visible.is_empty() {
        return format!("{NO_RELEVANT_NEWS}\n");
    }

    let mut out = String::new();
    for (i, article) in visible.iter().enumerate() {
        write_entry(&mut out, i + 1, article, brief);
    }
    out
}

fn write_entry(out: &mut String, index: usize, article: &Article, brief: bool) {
    let title = or_placeholder(article.title.as_deref(), "No Title");
    let description = or_placeholder(article.description.as_deref(), "No Description");

    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{index}. Title: {title}");
    if !brief {
        let author = or_placeholder(article.author.as_deref(), "No Author");
        let _ = writeln!(out, "   Author: {author}");
    }
    let _ = writeln!(out, "   Description: {description}");
    if !brief {
        let source = or_placeholder(article.source_name(), "Unknown Source");
        let published_at = or_placeholder(article.published_at.as_deref(), "No publishedAt");
        let url = or_placeholder(article.url.as_deref(), "No URL Available");
        let _ = writeln!(out, "   Source: {source}");
        let _ = writeln!(out, "   publishedAt: {published_at}");
        let _ = writeln!(out, "   URL: {url}");
    }
}

/// Empty strings count as missing, like `null`.
fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(placeholder)
}
