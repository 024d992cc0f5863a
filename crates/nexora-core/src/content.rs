//! Content block parser — turns an article body into typed display blocks.
//!
//! # Grammar
//!
//! | Source                          | Block                          |
//! |---------------------------------|--------------------------------|
//! | two or more `\n` in a row       | block separator                |
//! | block starting with `"## "`     | [`ContentBlock::Heading`]      |
//! | block starting with `"- "`      | [`ContentBlock::List`]         |
//! | anything else                   | [`ContentBlock::Paragraph`]    |
//!
//! Only blank lines split blocks. A list followed directly by a non-dash line
//! stays one list block, and a heading followed directly by body text keeps
//! that text as part of the heading.

use crate::types::ContentBlock;
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("block separator pattern is valid"));

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+").expect("heading marker pattern is valid"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+\s*").expect("list marker pattern is valid"));

/// Parse `content` into blocks, in source order.
///
/// Never fails. Empty or whitespace-only input yields no blocks.
pub fn parse(content: &str) -> Vec<ContentBlock> {
    BLOCK_SEPARATOR
        .split(content)
        .filter(|raw| !raw.trim().is_empty())
        .map(classify)
        .collect()
}

fn classify(raw: &str) -> ContentBlock {
    if raw.starts_with("## ") {
        ContentBlock::Heading {
            text: HEADING_MARKER.replace(raw, "").into_owned(),
        }
    } else if raw.starts_with("- ") {
        ContentBlock::List {
            items: raw
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(|line| LIST_MARKER.replace(line, "").into_owned())
                .collect(),
        }
    } else {
        ContentBlock::Paragraph {
            text: raw.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_no_blocks() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n\n"), vec![]);
        assert_eq!(parse("  \n\n \t "), vec![]);
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            parse("## Title\n\nBody"),
            vec![ContentBlock::heading("Title"), ContentBlock::paragraph("Body")]
        );
    }

    #[test]
    fn simple_list() {
        assert_eq!(parse("- a\n- b\n- c"), vec![ContentBlock::list(["a", "b", "c"])]);
    }

    #[test]
    fn list_strips_dash_runs_and_spacing() {
        assert_eq!(
            parse("- one\n--  two\n---three\n  \nfour"),
            vec![ContentBlock::list(["one", "two", "three", "four"])]
        );
    }

    #[test]
    fn list_keeps_trailing_text_verbatim() {
        assert_eq!(
            parse("- **Tome** — fast  "),
            vec![ContentBlock::list(["**Tome** — fast  "])]
        );
    }

    #[test]
    fn multi_line_heading_keeps_following_lines() {
        assert_eq!(
            parse("## TL;DR\nShort answer.\nLonger answer."),
            vec![ContentBlock::heading("TL;DR\nShort answer.\nLonger answer.")]
        );
    }

    #[test]
    fn heading_marker_requires_the_space() {
        assert_eq!(parse("##Tight"), vec![ContentBlock::paragraph("##Tight")]);
        assert_eq!(parse("### Deeper"), vec![ContentBlock::paragraph("### Deeper")]);
    }

    #[test]
    fn list_marker_requires_the_space() {
        assert_eq!(parse("-a\n-b"), vec![ContentBlock::paragraph("-a\n-b")]);
    }

    #[test]
    fn single_newlines_do_not_split() {
        assert_eq!(
            parse("line one\nline two"),
            vec![ContentBlock::paragraph("line one\nline two")]
        );
    }

    #[test]
    fn long_separator_runs_are_one_split() {
        assert_eq!(
            parse("a\n\n\n\nb"),
            vec![ContentBlock::paragraph("a"), ContentBlock::paragraph("b")]
        );
    }

    #[test]
    fn whitespace_between_newlines_is_not_a_separator() {
        assert_eq!(parse("a\n \nb"), vec![ContentBlock::paragraph("a\n \nb")]);
    }

    #[test]
    fn paragraph_text_is_unmodified() {
        assert_eq!(
            parse("\n  indented\n\ntrailing  "),
            vec![
                ContentBlock::paragraph("\n  indented"),
                ContentBlock::paragraph("trailing  "),
            ]
        );
    }

    #[test]
    fn mixed_blocks_keep_source_order() {
        let content = "## Winners\n\n- Gamma\n- Tome\n\nThat's all.";
        assert_eq!(
            parse(content),
            vec![
                ContentBlock::heading("Winners"),
                ContentBlock::list(["Gamma", "Tome"]),
                ContentBlock::paragraph("That's all."),
            ]
        );
    }
}
