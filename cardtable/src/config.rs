//! Host configuration
//!
//! Per-host visual parameters the table reads while rendering: container
//! styles, the spacing scale, table cell spacing and text styles. Every
//! section has defaults, so a host only has to supply what it changes.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::TableError;
use crate::table::{FontWeight, Spacing};
use crate::types::Color;

/// Configuration supplied by the host application.
///
/// # Example
///
/// ```
/// use cardtable::config::{ContainerStyleDefinition, HostConfig};
///
/// let config = HostConfig::default()
///     .with_cell_spacing(4)
///     .with_container_style("highlight", ContainerStyleDefinition::new().background("#FFF4CE"));
/// assert!(config.container_styles.contains("highlight"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub spacing: SpacingDefinition,
    pub container_styles: ContainerStyleSet,
    pub table: TableConfig,
    pub text_styles: TextStylesConfig,
}

impl HostConfig {
    /// Read a host config from JSON. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(TableError::HostConfig)
    }

    pub fn with_cell_spacing(mut self, cell_spacing: u16) -> Self {
        self.table.cell_spacing = cell_spacing;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingDefinition) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_container_style(
        mut self,
        name: impl AsRef<str>,
        style: ContainerStyleDefinition,
    ) -> Self {
        self.container_styles.insert(name, style);
        self
    }

    pub fn with_column_header_style(mut self, style: TextStyleDefinition) -> Self {
        self.text_styles.column_header = style;
        self
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Pixel values for each [`Spacing`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingDefinition {
    pub small: u16,
    pub default: u16,
    pub medium: u16,
    pub large: u16,
    pub extra_large: u16,
    pub padding: u16,
}

impl Default for SpacingDefinition {
    fn default() -> Self {
        Self {
            small: 3,
            default: 8,
            medium: 20,
            large: 30,
            extra_large: 40,
            padding: 15,
        }
    }
}

impl SpacingDefinition {
    pub fn px(&self, spacing: Spacing) -> u16 {
        match spacing {
            Spacing::None => 0,
            Spacing::Small => self.small,
            Spacing::Default => self.default,
            Spacing::Medium => self.medium,
            Spacing::Large => self.large,
            Spacing::ExtraLarge => self.extra_large,
            Spacing::Padding => self.padding,
        }
    }
}

// =============================================================================
// Container styles
// =============================================================================

/// Colours of one named container style. Values are host colour strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleDefinition {
    pub background_color: Option<String>,
    pub border_color: Option<String>,
}

static EMPTY_STYLE: ContainerStyleDefinition = ContainerStyleDefinition {
    background_color: None,
    border_color: None,
};

impl ContainerStyleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Parsed background colour; `None` when unset or unparseable.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color.as_deref().and_then(Color::parse)
    }

    /// Parsed border colour; `None` when unset or unparseable.
    pub fn border_color(&self) -> Option<Color> {
        self.border_color.as_deref().and_then(Color::parse)
    }
}

/// Registry of container styles by name. Names are case-insensitive.
///
/// Starts with the built-in styles (`default`, `emphasis`, `accent`,
/// `good`, `attention`, `warning`); a host config may override them or add
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyleSet {
    styles: HashMap<String, ContainerStyleDefinition>,
}

impl Default for ContainerStyleSet {
    fn default() -> Self {
        let builtin = [
            ("default", "#FFFFFF", "#CCCCCC"),
            ("emphasis", "#08000000", "#08000000"),
            ("accent", "#C7DEF9", "#62A8F7"),
            ("good", "#CCFFCC", "#69E569"),
            ("attention", "#FFC5B2", "#FF764C"),
            ("warning", "#FFE2B2", "#FFBC51"),
        ];

        let styles = builtin
            .into_iter()
            .map(|(name, background, border)| {
                (
                    name.to_owned(),
                    ContainerStyleDefinition::new().background(background).border(border),
                )
            })
            .collect();

        Self { styles }
    }
}

impl<'de> Deserialize<'de> for ContainerStyleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = HashMap::<String, ContainerStyleDefinition>::deserialize(deserializer)?;
        let mut set = Self::default();
        for (name, style) in overrides {
            set.insert(name, style);
        }
        Ok(set)
    }
}

impl ContainerStyleSet {
    pub fn insert(&mut self, name: impl AsRef<str>, style: ContainerStyleDefinition) {
        self.styles.insert(name.as_ref().to_ascii_lowercase(), style);
    }

    pub fn get(&self, name: &str) -> Option<&ContainerStyleDefinition> {
        self.styles.get(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up `name`, falling back to the `default` style when the name is
    /// absent or unknown.
    pub fn get_or_default(&self, name: Option<&str>) -> &ContainerStyleDefinition {
        name.and_then(|name| self.get(name))
            .or_else(|| self.get("default"))
            .unwrap_or(&EMPTY_STYLE)
    }
}

// =============================================================================
// Table and text
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Gap in pixels between cells and rows when grid lines are off.
    pub cell_spacing: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { cell_spacing: 8 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyleDefinition {
    pub weight: FontWeight,
    pub is_subtle: bool,
}

impl TextStyleDefinition {
    pub fn new(weight: FontWeight) -> Self {
        Self {
            weight,
            is_subtle: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStylesConfig {
    /// Text style for header cells.
    pub column_header: TextStyleDefinition,
}

impl Default for TextStylesConfig {
    fn default() -> Self {
        Self {
            column_header: TextStyleDefinition::new(FontWeight::Bolder),
        }
    }
}
