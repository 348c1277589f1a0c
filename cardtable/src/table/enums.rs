use serde::Deserialize;

use crate::serialization::SchemaEnum;
use crate::types::{Justify, TextAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl SchemaEnum for HorizontalAlignment {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("Left", Self::Left),
        ("Center", Self::Center),
        ("Right", Self::Right),
    ];
}

impl HorizontalAlignment {
    pub fn to_text_align(self) -> TextAlign {
        match self {
            Self::Left => TextAlign::Left,
            Self::Center => TextAlign::Center,
            Self::Right => TextAlign::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl SchemaEnum for VerticalAlignment {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("Top", Self::Top),
        ("Center", Self::Center),
        ("Bottom", Self::Bottom),
    ];
}

impl VerticalAlignment {
    /// Cell content stacks vertically, so vertical alignment is the main axis.
    pub fn to_justify(self) -> Justify {
        match self {
            Self::Top => Justify::Start,
            Self::Center => Justify::Center,
            Self::Bottom => Justify::End,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Default,
    Lighter,
    Bolder,
}

impl SchemaEnum for FontWeight {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("Default", Self::Default),
        ("Lighter", Self::Lighter),
        ("Bolder", Self::Bolder),
    ];
}

/// Named spacing step, resolved to pixels through the host config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    None,
    Small,
    #[default]
    Default,
    Medium,
    Large,
    ExtraLarge,
    Padding,
}

/// Role of a cell for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellType {
    Header,
    #[default]
    Data,
}
