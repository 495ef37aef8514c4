//! Semantic color roles and their resolution to concrete colors.
//!
//! A [`Theme`] maps role names such as `accent` or `card-background` to
//! [`Color`] values. Layout code never names a concrete color; it asks the
//! theme for a role. Content specs may carry arbitrary role strings through
//! from upstream data, so resolving an unknown role yields
//! [`FALLBACK_COLOR`] instead of failing.
//!
//! # Example
//!
//! ```
//! # use slidecraft_core::{color::Color, theme::{ColorRole, Theme, FALLBACK_COLOR}};
//! let mut theme = Theme::dark();
//! theme.register("brand", Color::new("#6F42C1").unwrap());
//!
//! assert_eq!(theme.resolve("brand"), Color::new("#6F42C1").unwrap());
//! assert_eq!(theme.resolve("no-such-role"), Color::new(FALLBACK_COLOR).unwrap());
//! assert!(theme.contains(ColorRole::CardBackground.as_str()));
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::color::Color;

/// Color returned for roles the theme does not know: a muted gray.
pub const FALLBACK_COLOR: &str = "#8899AA";

/// Font family used by the built-in presets.
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// The color roles every preset defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Primary accent (rules, accent bars, stat values)
    Accent,
    /// Slide background
    Background,
    /// Card background rectangles
    CardBackground,
    Success,
    Warning,
    Danger,
    /// Secondary text such as subtitles and footnotes
    MutedText,
    /// Body text inside cards and lists
    LightText,
    /// Secondary accent used for card and list titles
    Highlight,
    /// Slide titles
    Text,
}

impl ColorRole {
    /// All roles, in the order presets register them.
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::CardBackground,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::MutedText,
        ColorRole::LightText,
        ColorRole::Highlight,
        ColorRole::Text,
    ];

    /// Returns the role key as used in themes and deck files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Background => "background",
            Self::CardBackground => "card-background",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::MutedText => "muted-text",
            Self::LightText => "light-text",
            Self::Highlight => "highlight",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown color role `{s}`"))
    }
}

/// Built-in palettes a theme can start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Deep navy background with blue and cyan accents
    #[default]
    Dark,
    /// Light slate background with saturated accents
    Light,
}

/// Mapping from color role to concrete color.
///
/// The theme is built once before composition and only read afterwards, so a
/// shared `&Theme` can be handed to every slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: IndexMap<String, Color>,
    font_family: String,
    fallback: Color,
}

impl Theme {
    /// Creates a theme with no registered roles.
    ///
    /// Every lookup on an empty theme returns the fallback color.
    pub fn empty() -> Self {
        Self {
            colors: IndexMap::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            fallback: palette_color(FALLBACK_COLOR),
        }
    }

    /// Creates a theme from one of the built-in presets.
    pub fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Dark => Self::dark(),
            ThemePreset::Light => Self::light(),
        }
    }

    /// The navy palette the default deck is designed around.
    pub fn dark() -> Self {
        Self::with_palette(&[
            (ColorRole::Accent, "#007BFF"),
            (ColorRole::Background, "#0F172A"),
            (ColorRole::CardBackground, "#1A253C"),
            (ColorRole::Success, "#28A745"),
            (ColorRole::Warning, "#FF9F43"),
            (ColorRole::Danger, "#DC3545"),
            (ColorRole::MutedText, "#8899AA"),
            (ColorRole::LightText, "#CCCCCC"),
            (ColorRole::Highlight, "#00D4FF"),
            (ColorRole::Text, "#FFFFFF"),
        ])
    }

    /// A light counterpart of [`Theme::dark`].
    pub fn light() -> Self {
        Self::with_palette(&[
            (ColorRole::Accent, "#0066D6"),
            (ColorRole::Background, "#F8FAFC"),
            (ColorRole::CardBackground, "#E2E8F0"),
            (ColorRole::Success, "#15803D"),
            (ColorRole::Warning, "#C2410C"),
            (ColorRole::Danger, "#B91C1C"),
            (ColorRole::MutedText, "#64748B"),
            (ColorRole::LightText, "#334155"),
            (ColorRole::Highlight, "#0891B2"),
            (ColorRole::Text, "#0F172A"),
        ])
    }

    fn with_palette(palette: &[(ColorRole, &str)]) -> Self {
        let mut theme = Self::empty();
        for (role, hex) in palette {
            theme.register(role.as_str(), palette_color(hex));
        }
        theme
    }

    /// Maps `role` to `color`, replacing any previous mapping.
    pub fn register(&mut self, role: impl Into<String>, color: Color) {
        self.colors.insert(role.into(), color);
    }

    /// Resolves a role to its color, or to the fallback color if the role is
    /// not registered.
    pub fn resolve(&self, role: &str) -> Color {
        match self.colors.get(role) {
            Some(color) => *color,
            None => {
                debug!(role; "Unknown color role, using fallback");
                self.fallback
            }
        }
    }

    /// Resolves one of the well-known roles.
    pub fn role(&self, role: ColorRole) -> Color {
        self.resolve(role.as_str())
    }

    /// Returns true if `role` has a registered color.
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    /// Iterates registered roles in registration order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns the color used for unknown roles.
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    /// Returns the font family writers should render text with.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn palette_color(hex: &str) -> Color {
    Color::new(hex).expect("palette colors are valid hex literals")
}
