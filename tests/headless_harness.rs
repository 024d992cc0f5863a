#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `nexora` as a compiled binary via
//! [`std::process::Command`]. It validates headless mode from the outside,
//! the way a user or a shell pipeline would observe it.
//!
//! - **`--list`** with and without `--query`, text and json.
//! - **`--show`** text layout and json blocks.
//! - **Exit codes**: clean exit = 0; unknown article or bad flags = non-zero.
//! - **`--articles`**: a store file replaces the built-in articles; an invalid
//!   store file fails with a message naming the problem.
//! - **Config**: the first run writes `config.toml`; its `date_format` is
//!   honoured.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal; see the widget unit tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the binary with an isolated config directory.
fn nexora(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nexora"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn nexora")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

// ---------------------------------------------------------------------------
// --list
// ---------------------------------------------------------------------------

#[test]
fn list_prints_all_builtin_articles() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--list"]);
    assert!(out.status.success());

    let ids: Vec<String> = stdout(&out)
        .lines()
        .map(|l| l.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(ids, SAMPLE_IDS);
}

#[test]
fn list_with_query_filters() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--list", "--query", "perplexity"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "perplexity-vs-chatgpt\t18 Sep 2025\t8 min\tPerplexity vs ChatGPT — Which Is Better for Research?\n"
    );
}

#[test]
fn list_json_is_an_array_of_articles() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--list", "--query", "AI", "--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["read_time"], 6);
    assert_eq!(array[0]["trendy"], true);
}

// ---------------------------------------------------------------------------
// --show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_detail_view() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--show", "ai-summarizer"]);
    assert!(out.status.success());

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Summarize Lectures with AI: Quick & Smart Workflow");
    assert_eq!(lines[1], "21 Oct 2025 • 6 min read");
    assert_eq!(lines[2], "─".repeat(40));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "## Why it matters");
    assert!(text.ends_with("Always verify AI answers before submission.\n"));
}

#[test]
fn show_unknown_id_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--show", "does-not-exist"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does-not-exist"), "{stderr}");
}

#[test]
fn list_and_show_conflict() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--list", "--show", "ai-summarizer"]);
    assert!(!out.status.success());
}

#[test]
fn bad_mode_is_rejected() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--mode", "sepia", "--list"]);
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// --articles and config
// ---------------------------------------------------------------------------

#[test]
fn articles_file_replaces_builtin_store() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("articles.toml");
    std::fs::write(&file, ARTICLES_TOML).unwrap();

    let out = nexora(home.path(), &["--articles", file.to_str().unwrap(), "--list"]);
    assert!(out.status.success());
    let ids: Vec<String> = stdout(&out)
        .lines()
        .map(|l| l.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["rust-tui", "config-rs"]);
}

#[test]
fn duplicate_ids_fail_to_load() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("dupes.toml");
    std::fs::write(
        &file,
        r#"
[[articles]]
id = "same"
title = "A"
excerpt = ""
content = ""
date = "2025-01-01"
read_time = 1

[[articles]]
id = "same"
title = "B"
excerpt = ""
content = ""
date = "2025-01-02"
read_time = 2
"#,
    )
    .unwrap();

    let out = nexora(home.path(), &["--articles", file.to_str().unwrap(), "--list"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("duplicate article id"), "{stderr}");
}

#[test]
fn first_run_writes_config_and_honours_date_format() {
    let home = TempDir::new().unwrap();
    let out = nexora(home.path(), &["--list"]);
    assert!(out.status.success());
    let config = home.path().join("nexora").join("config.toml");
    assert!(config.exists());

    std::fs::write(&config, "[ui]\ndate_format = \"%Y-%m-%d\"\n").unwrap();
    let out = nexora(home.path(), &["--list", "--query", "perplexity"]);
    assert!(stdout(&out).contains("\t2025-09-18\t"));
}
