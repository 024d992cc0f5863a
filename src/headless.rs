//! Headless output: print the listing or one article to a writer and exit.

use anyhow::Context;
use nexora_core::{content, date::format_date, Article, ArticleStore, ContentBlock, ViewController};
use serde::Serialize;
use std::io::Write;

/// Output encoding for headless mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Detail<'a> {
    article: &'a Article,
    blocks: Vec<ContentBlock>,
}

/// Prints views of a store without touching the terminal.
pub struct Printer<'a> {
    pub date_format: &'a str,
    pub format: OutputFormat,
}

impl Printer<'_> {
    /// Print the articles matching `query`, one per line (text) or as a JSON
    /// array.
    pub fn list(&self, store: ArticleStore, query: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let mut controller = ViewController::new(store);
        controller.set_query(query);
        let articles = controller.visible_articles();
        tracing::debug!(query, matched = articles.len(), "headless list");

        match self.format {
            OutputFormat::Text => {
                for article in articles {
                    writeln!(
                        out,
                        "{}\t{}\t{} min\t{}",
                        article.id,
                        format_date(&article.date, self.date_format),
                        article.read_time,
                        article.title
                    )?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &articles)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Print the detail view of article `id`. Fails when the store has no
    /// such article.
    pub fn show(&self, store: ArticleStore, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let mut controller = ViewController::new(store);
        controller
            .open_article(id)
            .with_context(|| format!("cannot show article {id:?}"))?;
        let article = controller
            .selected_article()
            .with_context(|| format!("article {id:?} vanished from the store"))?;
        let blocks = content::parse(&article.content);

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{}", article.title)?;
                writeln!(
                    out,
                    "{} • {} min read",
                    format_date(&article.date, self.date_format),
                    article.read_time
                )?;
                writeln!(out, "{}", "─".repeat(40))?;
                for block in &blocks {
                    writeln!(out)?;
                    writeln!(out, "{block}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &Detail { article, blocks })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
