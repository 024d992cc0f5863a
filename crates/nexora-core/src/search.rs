//! Search layer — case-insensitive substring filter over the article store.
//!
//! An article matches when the query occurs in its title, its excerpt, or its
//! tags joined by single spaces. The empty query matches everything. Results
//! keep store order; nothing is ranked or re-sorted.
//!
//! Case is folded by lowering, upper-casing, then lowering again, so
//! expanding letters agree with their expansions (`ß`, `ẞ`, `SS` and `ss`
//! all fold to `ss`). Final sigma is folded to `σ` so the fold never depends
//! on where a letter sits in a word.

use crate::types::Article;

/// Return the articles matching `query`, in their original order.
pub fn filter<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = fold_case(query);
    articles
        .iter()
        .filter(|article| matches_folded(article, &needle))
        .collect()
}

/// Whether a single article matches `query`.
pub fn matches(article: &Article, query: &str) -> bool {
    matches_folded(article, &fold_case(query))
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
        .to_uppercase()
        .to_lowercase()
        .replace('ς', "σ")
}

fn matches_folded(article: &Article, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold_case(&article.title).contains(needle)
        || fold_case(&article.excerpt).contains(needle)
        || fold_case(&article.tag_line()).contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
