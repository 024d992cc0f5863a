//! Display mode — the light/dark session toggle.
//!
//! The mode is independent of the view state and only read at render time.
//! Its starting value is decided once, outside the state machine: the
//! configured [`ModePreference`] either names a mode or asks for the ambient
//! one, which [`DisplayMode::from_ambient`] derives from the terminal's
//! `COLORFGBG` hint.

use crate::error::ParseModeError;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// Derive the mode from a `COLORFGBG` value (`"fg;bg"` or
    /// `"fg;default;bg"`).
    ///
    /// Background indices 0–6 and 8 are the dark half of the 16-colour
    /// palette. Anything missing or unparseable is treated as light.
    pub fn from_ambient(colorfgbg: Option<&str>) -> Self {
        let bg = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(0..=6 | 8) => DisplayMode::Dark,
            _ => DisplayMode::Light,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Light => write!(f, "light"),
            DisplayMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// `[ui] mode` setting: a fixed mode or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ModePreference {
    /// Resolve to a concrete mode. `colorfgbg` is only consulted for `Auto`.
    pub fn resolve(self, colorfgbg: Option<&str>) -> DisplayMode {
        match self {
            ModePreference::Auto => DisplayMode::from_ambient(colorfgbg),
            ModePreference::Light => DisplayMode::Light,
            ModePreference::Dark => DisplayMode::Dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
