//! Core types for nexora-core.
//!
//! This module defines the content model shared by every layer: the immutable
//! [`Article`] record and the transient [`ContentBlock`] produced when an
//! article body is opened.

use serde::{Deserialize, Serialize};

/// A single blog article.
///
/// Articles are loaded once into the [`ArticleStore`](crate::store::ArticleStore)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique, stable identifier (also used as the render key).
    pub id: String,
    pub title: String,
    /// One-sentence summary shown on the listing card.
    pub excerpt: String,
    /// Body text in the block grammar understood by [`crate::content::parse`].
    pub content: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`). Parsed only for display.
    pub date: String,
    /// Labels in authoring order. Duplicates are kept as-is.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes. Always positive in a loaded store.
    pub read_time: u32,
    /// Marks the article as trending. Absent in the source means `false`.
    #[serde(default)]
    pub trendy: bool,
}

impl Article {
    /// Tags joined by a single space, in stored order.
    ///
    /// This is the form the search filter matches against.
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}

/// A typed display block derived from an article body.
///
/// Blocks have no identity of their own; renderers key them by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading { text: String },
    List { items: Vec<String> },
    Paragraph { text: String },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }
}

impl std::fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentBlock::Heading { text } => write!(f, "## {text}"),
            ContentBlock::List { items } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  • {item}")?;
                }
                Ok(())
            }
            ContentBlock::Paragraph { text } => write!(f, "{text}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
