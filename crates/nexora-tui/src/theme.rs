//! Colour themes for the nexora TUI.
//!
//! Themes are defined as TOML files, one per [`DisplayMode`]. Both are
//! embedded in the binary via [`include_str!`] so the application works
//! without any files on disk. Call [`Theme::for_mode`] whenever the display
//! mode changes and keep the result in the application state.

use config::{Config, File, FileFormat};
use nexora_core::DisplayMode;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    brand: RawStyle,
    title: RawStyle,
    meta: RawStyle,
    excerpt: RawStyle,
    heading: RawStyle,
    bullet: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBadges {
    tag: RawStyle,
    trending: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawList {
    selected: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    base: RawStyle,
    borders: RawBorders,
    text: RawText,
    badges: RawBadges,
    list: RawList,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Which display mode this theme renders.
    pub mode: DisplayMode,

    /// Foreground/background painted under every pane.
    pub base: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// "Nexora" in the nav bar.
    pub brand: Style,
    /// Article titles on cards and in the detail header.
    pub title: Style,
    /// Date and read-time lines.
    pub meta: Style,
    pub excerpt: Style,
    /// Section headings inside an article body.
    pub heading: Style,
    /// Bullet glyph in front of list items.
    pub bullet: Style,

    pub tag: Style,
    pub trending: Style,

    /// Highlight for the selected card in the listing.
    pub selected: Style,
}

impl Theme {
    /// Load the embedded theme for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. Both themes are covered by
    /// the tests below, so this should never happen in practice.
    pub fn for_mode(mode: DisplayMode) -> Self {
        let src = match mode {
            DisplayMode::Light => LIGHT_THEME_SRC,
            DisplayMode::Dark => DARK_THEME_SRC,
        };
        Self::from_toml_str(src, mode).expect("embedded theme must be valid TOML")
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so themes stay forward-compatible.
    pub fn from_toml_str(src: &str, mode: DisplayMode) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            mode,
            base: raw.base.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            brand: raw.text.brand.into_style(),
            title: raw.text.title.into_style(),
            meta: raw.text.meta.into_style(),
            excerpt: raw.text.excerpt.into_style(),
            heading: raw.text.heading.into_style(),
            bullet: raw.text.bullet.into_style(),
            tag: raw.badges.tag.into_style(),
            trending: raw.badges.trending.into_style(),
            selected: raw.list.selected.into_style(),
        })
    }

    /// Border style for a pane, depending on whether it holds focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(DisplayMode::default())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(s.get(1..3)?, 16).ok()?;
            let g = u8::from_str_radix(s.get(3..5)?, 16).ok()?;
            let b = u8::from_str_radix(s.get(5..7)?, 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
