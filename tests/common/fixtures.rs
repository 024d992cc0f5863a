//! Static fixtures shared across harnesses.

use nexora_core::Article;

/// Ids of the built-in articles, in store order.
pub const SAMPLE_IDS: &[&str] = &["ai-summarizer", "perplexity-vs-chatgpt", "best-ai-slide-tools"];

/// An article file in the `[[articles]]` layout with two entries.
pub const ARTICLES_TOML: &str = r#"
[[articles]]
id        = "rust-tui"
title     = "Building TUIs in Rust"
excerpt   = "ratatui and crossterm from scratch."
date      = "2025-11-02"
tags      = ["Rust", "TUI"]
read_time = 7
content   = """
## Setup
Add ratatui and crossterm.

- ratatui
- crossterm

Then draw a frame."""

[[articles]]
id        = "config-rs"
title     = "Layered Config"
excerpt   = "Defaults first, then the user's file."
date      = "2025-11-10"
read_time = 3
content   = "Short and sweet."
"#;

/// Content exercising every block kind, blank-line runs, and whitespace-only
/// pieces.
pub const MIXED_CONTENT: &str =
    "## Heading One\n\nIntro paragraph.\nSecond line.\n\n\n- alpha\n--beta\n-   gamma\n\n   \n\nOutro.";

/// A corpus of `n` synthetic articles for throughput and property tests.
pub fn synthetic_articles(n: usize) -> Vec<Article> {
    const TOPICS: &[&str] = &["AI", "Rust", "Design", "Study", "Tools", "Research"];
    (0..n)
        .map(|i| Article {
            id: format!("article-{i}"),
            title: format!("{} notes #{i}", TOPICS[i % TOPICS.len()]),
            excerpt: format!("What we learned about {} this week.", TOPICS[(i + 1) % TOPICS.len()]),
            content: format!(
                "## Part {i}\nOverview.\n\n- first\n- second\n\nClosing words for {}.",
                TOPICS[(i + 2) % TOPICS.len()]
            ),
            date: format!("2025-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            tags: vec![TOPICS[i % TOPICS.len()].to_string(), TOPICS[(i + 3) % TOPICS.len()].to_string()],
            read_time: (i % 15 + 1) as u32,
            trendy: i % 7 == 0,
        })
        .collect()
}
