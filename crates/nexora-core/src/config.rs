//! Configuration types for nexora.
//!
//! [`Config::load`] reads `~/.config/nexora/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::date::DEFAULT_DATE_FORMAT;
use crate::display::ModePreference;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
mode          = "auto"
date_format   = "%-d %b %Y"
show_trending = true

[content]
# articles = "/path/to/articles.toml"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/nexora/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Starting display mode; `auto` follows the terminal background.
    #[serde(default)]
    pub mode: ModePreference,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_show_trending")]
    pub show_trending: bool,
}

fn default_date_format() -> String { DEFAULT_DATE_FORMAT.to_string() }
fn default_show_trending() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mode: ModePreference::default(),
            date_format: default_date_format(),
            show_trending: default_show_trending(),
        }
    }
}

/// `[content]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Article store file replacing the built-in articles.
    #[serde(default)]
    pub articles: Option<PathBuf>,
}

impl Config {
    /// Load from `~/.config/nexora/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load `path` layered over the built-in defaults. A missing file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nexora")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.ui.mode, ModePreference::Auto);
        assert_eq!(cfg.ui.date_format, "%-d %b %Y");
        assert!(cfg.ui.show_trending);
        assert_eq!(cfg.content.articles, None);
    }

    #[test]
    fn user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[ui]\nmode = \"dark\"\nshow_trending = false\n\n[content]\narticles = \"/srv/blog.toml\""
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.ui.mode, ModePreference::Dark);
        assert!(!cfg.ui.show_trending);
        // untouched keys keep their defaults
        assert_eq!(cfg.ui.date_format, "%-d %b %Y");
        assert_eq!(cfg.content.articles, Some(PathBuf::from("/srv/blog.toml")));
    }

    #[test]
    fn missing_user_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.ui.mode, ModePreference::Auto);
    }
}
