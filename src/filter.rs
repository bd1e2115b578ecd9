//! Removal of redacted articles.
//!
//! When a story is taken down the upstream keeps the record but replaces
//! its text with a placeholder. Such records are useless to display.

use crate::models::Article;

/// Placeholder the upstream puts in place of redacted content.
pub const REMOVED_SENTINEL: &str = "[Removed]";

/// True if the title, description or source name is the removed placeholder.
pub fn is_removed(article: &Article) -> bool {
    [
        article.title.as_deref(),
        article.description.as_deref(),
        article.source_name(),
    ]
    .into_iter()
    .any(|field| field == Some(REMOVED_SENTINEL))
}

/// Drop every removed article, keeping the order of the rest.
pub fn retain_visible(mut articles: Vec<Article>) -> Vec<Article> {
    articles.retain(|article| !is_removed(article));
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSource;

    fn article(title: &str, description: &str, source: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            source: ArticleSource {
                id: None,
                name: Some(source.to_string()),
            },
            ..Article::default()
        }
    }

    #[test]
    fn test_is_removed() {
        assert!(!is_removed(&article("t", "d", "s")));
        assert!(is_removed(&article(REMOVED_SENTINEL, "d", "s")));
        assert!(is_removed(&article("t", REMOVED_SENTINEL, "s")));
        assert!(is_removed(&article("t", "d", REMOVED_SENTINEL)));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_removed(&article("[removed]", "d", "s")));
        assert!(!is_removed(&article("t", "[Removed] story", "s")));
        assert!(!is_removed(&Article::default()));
    }

    #[test]
    fn test_retain_visible_keeps_order() {
        let articles = vec![
            article("a", "d", "s"),
            article(REMOVED_SENTINEL, "d", "s"),
            article("b", "d", "s"),
            article("c", "d", REMOVED_SENTINEL),
        ];

        let visible = retain_visible(articles);
        let titles: Vec<_> = visible.iter().map(|a| a.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn test_retain_visible_is_idempotent() {
        let articles = vec![
            article("a", REMOVED_SENTINEL, "s"),
            article("b", "d", "s"),
            article("c", "d", "s"),
        ];

        let once = retain_visible(articles);
        let twice = retain_visible(once.clone());
        assert_eq!(once, twice);
    }
}
