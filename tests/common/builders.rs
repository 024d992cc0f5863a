//! Test builders — ergonomic constructors for `Article` and `ArticleStore`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use nexora_core::{Article, ArticleStore};

// ---------------------------------------------------------------------------
// ArticleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Article`] test fixtures.
///
/// # Example
///
/// ```rust
/// let article = ArticleBuilder::new("rust-tui")
///     .title("Building TUIs in Rust")
///     .tags(["Rust", "TUI"])
///     .content("## Intro\nratatui is great.")
///     .build();
/// ```
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            article: Article {
                title: format!("Title of {id}"),
                excerpt: String::new(),
                content: String::new(),
                date: "2025-01-01".to_string(),
                tags: Vec::new(),
                read_time: 1,
                trendy: false,
                id,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.article.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.article.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.article.content = content.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.article.date = date.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.article.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn read_time(mut self, minutes: u32) -> Self {
        self.article.read_time = minutes;
        self
    }

    pub fn trendy(mut self) -> Self {
        self.article.trendy = true;
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

/// Build a store from `articles`, panicking on validation errors.
pub fn store_of(articles: Vec<Article>) -> ArticleStore {
    ArticleStore::new(articles).expect("test store must be valid")
}

/// Ids of `articles`, in order.
pub fn ids<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Vec<&'a str> {
    articles.into_iter().map(|a| a.id.as_str()).collect()
}
