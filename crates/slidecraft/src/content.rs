//! Declarative slide content.
//!
//! A [`Deck`] is an ordered list of [`ContentSpec`]s, usually parsed from a
//! TOML deck file. Each spec carries a title and a [`SlideLayout`] selected by
//! its `kind` key:
//!
//! ```toml
//! [[slides]]
//! title = "Architecture"
//! kind = "cardGrid"
//! columns = 2
//!
//! [[slides.cards]]
//! title = "Backend"
//! icon = "⚙️"
//! bullets = ["Express.js", "JWT auth"]
//! color = "accent"
//! ```
//!
//! Content is inert data: the composer reads it and never mutates it.

use std::fmt;

use serde::Deserialize;

use crate::error::ValidationError;

/// Parsed deck file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Deck {
    #[serde(default)]
    slides: Vec<ContentSpec>,
}

impl Deck {
    pub fn new(slides: Vec<ContentSpec>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[ContentSpec] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Declarative description of one slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentSpec {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    footnote: Option<String>,
    #[serde(flatten)]
    layout: SlideLayout,
}

impl ContentSpec {
    pub fn new(title: impl Into<String>, layout: SlideLayout) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            footnote: None,
            layout,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn footnote(&self) -> Option<&str> {
        self.footnote.as_deref()
    }

    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    /// Checks the slide for structural problems that prevent layout.
    ///
    /// Runs before any shape is produced.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a blank title, a grid kind with zero
    /// columns or a flow without steps.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        match &self.layout {
            SlideLayout::CardGrid { columns: 0, .. } | SlideLayout::Stats { columns: 0, .. } => {
                Err(ValidationError::ZeroColumns {
                    kind: self.layout.kind(),
                })
            }
            SlideLayout::Flow { steps, .. } if steps.is_empty() => Err(ValidationError::EmptyFlow),
            _ => Ok(()),
        }
    }
}

/// The layout pattern of a slide and the content it arranges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlideLayout {
    /// Title slide with a left accent bar and free text lines.
    Cover {
        #[serde(default)]
        lines: Vec<String>,
    },
    /// Equal-size cards on a grid, filled row by row.
    CardGrid {
        #[serde(default = "default_card_columns")]
        columns: usize,
        #[serde(default)]
        cards: Vec<CardSpec>,
    },
    /// One bulleted text block over the whole body.
    List {
        #[serde(default)]
        heading: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    },
    /// Steps in a single row joined by connector glyphs.
    Flow {
        steps: Vec<FlowStep>,
        #[serde(default)]
        connector: Option<String>,
    },
    /// Label/value pairs split over two columns.
    Table {
        #[serde(default)]
        rows: Vec<Entry>,
    },
    /// Large values with captions on a grid.
    Stats {
        #[serde(default = "default_stat_columns")]
        columns: usize,
        #[serde(default)]
        stats: Vec<Entry>,
    },
}

fn default_card_columns() -> usize {
    3
}

fn default_stat_columns() -> usize {
    4
}

impl SlideLayout {
    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Cover { .. } => LayoutKind::Cover,
            Self::CardGrid { .. } => LayoutKind::CardGrid,
            Self::List { .. } => LayoutKind::List,
            Self::Flow { .. } => LayoutKind::Flow,
            Self::Table { .. } => LayoutKind::Table,
            Self::Stats { .. } => LayoutKind::Stats,
        }
    }
}

/// Discriminant of [`SlideLayout`], used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Cover,
    CardGrid,
    List,
    Flow,
    Table,
    Stats,
}

impl LayoutKind {
    /// Returns the name used for the `kind` key in deck files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::CardGrid => "cardGrid",
            Self::List => "list",
            Self::Flow => "flow",
            Self::Table => "table",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled card with bullet items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardSpec {
    title: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    bullets: Vec<String>,
    /// Theme role for the card title.
    #[serde(default = "default_card_color")]
    color: String,
}

fn default_card_color() -> String {
    "highlight".to_string()
}

impl CardSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            bullets: Vec::new(),
            color: default_card_color(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, role: impl Into<String>) -> Self {
        self.color = role.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// One step of a flow layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowStep {
    title: String,
    #[serde(default)]
    description: Vec<String>,
    #[serde(default = "default_step_color")]
    color: String,
}

fn default_step_color() -> String {
    "accent".to_string()
}

impl FlowStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Vec::new(),
            color: default_step_color(),
        }
    }

    pub fn with_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, role: impl Into<String>) -> Self {
        self.color = role.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// A label/value pair shown by table and stats layouts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    label: String,
    value: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_card_grid_with_defaults() {
        let deck: Deck = toml::from_str(
            r#"
            [[slides]]
            title = "Architecture"
            kind = "cardGrid"

            [[slides.cards]]
            title = "Backend"
            bullets = ["Express.js", "JWT auth"]
            "#,
        )
        .unwrap();

        assert_eq!(deck.len(), 1);
        let spec = &deck.slides()[0];
        assert_eq!(spec.title(), "Architecture");
        assert_eq!(spec.subtitle(), None);

        let SlideLayout::CardGrid { columns, cards } = spec.layout() else {
            panic!("expected a card grid, got {:?}", spec.layout());
        };
        assert_eq!(*columns, 3);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].color(), "highlight");
        assert_eq!(cards[0].bullets(), ["Express.js", "JWT auth"]);
    }

    #[test]
    fn test_deserialize_every_kind() {
        let deck: Deck = toml::from_str(
            r#"
            [[slides]]
            title = "Cover"
            kind = "cover"
            lines = ["One", "Two"]

            [[slides]]
            title = "List"
            kind = "list"
            items = ["a"]

            [[slides]]
            title = "Flow"
            kind = "flow"
            connector = "⇒"
            steps = [{ title = "Plan" }, { title = "Build", color = "success" }]

            [[slides]]
            title = "Table"
            kind = "table"
            rows = [{ label = "Node", value = "18+" }]

            [[slides]]
            title = "Stats"
            subtitle = "Numbers"
            footnote = "Source: survey"
            kind = "stats"
            columns = 2
            stats = [{ label = "Users", value = "10k" }]
            "#,
        )
        .unwrap();

        let kinds: Vec<_> = deck.slides().iter().map(|s| s.layout().kind()).collect();
        assert_eq!(
            kinds,
            [
                LayoutKind::Cover,
                LayoutKind::List,
                LayoutKind::Flow,
                LayoutKind::Table,
                LayoutKind::Stats
            ]
        );

        let SlideLayout::Flow { steps, connector } = deck.slides()[2].layout() else {
            panic!("expected a flow");
        };
        assert_eq!(connector.as_deref(), Some("⇒"));
        assert_eq!(steps[0].color(), "accent");
        assert_eq!(steps[1].color(), "success");

        assert_eq!(deck.slides()[4].footnote(), Some("Source: survey"));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = toml::from_str::<Deck>("[[slides]]\ntitle = \"x\"\nkind = \"carousel\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_columns() {
        let spec = ContentSpec::new(
            "Grid",
            SlideLayout::CardGrid {
                columns: 0,
                cards: vec![CardSpec::new("a")],
            },
        );
        assert_eq!(
            spec.validate(),
            Err(ValidationError::ZeroColumns {
                kind: LayoutKind::CardGrid
            })
        );

        let spec = ContentSpec::new(
            "Stats",
            SlideLayout::Stats {
                columns: 0,
                stats: Vec::new(),
            },
        );
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::ZeroColumns {
                kind: LayoutKind::Stats
            })
        ));
    }

    #[test]
    fn test_validate_empty_flow_and_title() {
        let flow = ContentSpec::new(
            "Flow",
            SlideLayout::Flow {
                steps: Vec::new(),
                connector: None,
            },
        );
        assert_eq!(flow.validate(), Err(ValidationError::EmptyFlow));

        let untitled = ContentSpec::new("   ", SlideLayout::List {
            heading: None,
            items: Vec::new(),
        });
        assert_eq!(untitled.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_accepts_empty_grid() {
        let spec = ContentSpec::new(
            "Nothing yet",
            SlideLayout::CardGrid {
                columns: 2,
                cards: Vec::new(),
            },
        );
        assert_eq!(spec.validate(), Ok(()));
    }
}
