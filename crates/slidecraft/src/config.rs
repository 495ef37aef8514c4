//! Configuration types for Slidecraft deck composition.
//!
//! This module provides configuration structures that control slide geometry
//! and theming. All types implement [`serde::Deserialize`] so they can be
//! loaded from TOML; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Slide size, margins and gutters, in points.
//! - [`StyleConfig`] - Theme preset, font family and per-role color overrides.
//!
//! # Example
//!
//! ```
//! # use slidecraft::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().slide_width(), 960.0);
//! assert!(config.style().theme().is_ok());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use slidecraft_core::{
    color::Color,
    geometry::{Rect, Size},
    theme::{Theme, ThemePreset},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Slide geometry shared by every layout kind.
///
/// The defaults describe a 13.333in × 7.5in widescreen slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    slide_width: f32,
    slide_height: f32,
    /// Distance between the slide edge and any content.
    margin: f32,
    column_gutter: f32,
    row_gutter: f32,
    /// Horizontal space between flow steps, where connectors are drawn.
    connector_gap: f32,
    /// Vertical space between slides when stacked in one SVG document.
    slide_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slide_width: 960.0,
            slide_height: 540.0,
            margin: 36.0,
            column_gutter: 21.6,
            row_gutter: 14.4,
            connector_gap: 48.0,
            slide_gap: 24.0,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with a different slide size.
    pub fn with_slide_size(mut self, width: f32, height: f32) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    /// Returns a copy with different grid gutters.
    pub fn with_gutters(mut self, column_gutter: f32, row_gutter: f32) -> Self {
        self.column_gutter = column_gutter;
        self.row_gutter = row_gutter;
        self
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn slide_height(&self) -> f32 {
        self.slide_height
    }

    pub fn slide_size(&self) -> Size {
        Size::new(self.slide_width, self.slide_height)
    }

    /// Returns the full slide area anchored at the origin.
    pub fn slide_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.slide_width, self.slide_height)
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn column_gutter(&self) -> f32 {
        self.column_gutter
    }

    pub fn row_gutter(&self) -> f32 {
        self.row_gutter
    }

    pub fn connector_gap(&self) -> f32 {
        self.connector_gap
    }

    pub fn slide_gap(&self) -> f32 {
        self.slide_gap
    }
}

/// Visual styling configuration.
///
/// ```toml
/// [style]
/// preset = "light"
/// font_family = "Inter"
///
/// [style.colors]
/// accent = "#6F42C1"
/// brand = "rebeccapurple"
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Palette the theme starts from.
    #[serde(default)]
    preset: ThemePreset,

    /// Font family override for all text.
    #[serde(default)]
    font_family: Option<String>,

    /// Role overrides as color strings, registered after the preset.
    #[serde(default)]
    colors: IndexMap<String, String>,
}

impl StyleConfig {
    /// Creates a style configuration from a preset without overrides.
    pub fn new(preset: ThemePreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Adds a role override (builder style).
    pub fn with_color(mut self, role: &str, color: &str) -> Self {
        self.colors.insert(role.to_string(), color.to_string());
        self
    }

    /// Sets the font family override (builder style).
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn preset(&self) -> ThemePreset {
        self.preset
    }

    /// Builds the [`Theme`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any override cannot be parsed as a [`Color`].
    pub fn theme(&self) -> Result<Theme, String> {
        let mut theme = Theme::from_preset(self.preset);

        for (role, value) in &self.colors {
            let color = Color::new(value)
                .map_err(|err| format!("Invalid color for role `{role}` in config: {err}"))?;
            theme.register(role.as_str(), color);
        }

        if let Some(family) = &self.font_family {
            theme.set_font_family(family);
        }

        Ok(theme)
    }
}
