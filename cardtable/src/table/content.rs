//! Card elements that live inside a table cell.

use serde_json::Value;

use super::{FontWeight, HorizontalAlignment};
use crate::element::Element;
use crate::serialization::schema::{self, ID, TYPE};
use crate::serialization::{
    PropertyBag, PropertyDefinition, SerializationContext, ValidationEventKind, Version,
};
use crate::types::{Style, TextStyle, TextWrap};

/// An item of a cell's content.
#[derive(Debug, Clone, PartialEq)]
pub enum CardElement {
    TextBlock(TextBlock),
    /// Any element type this crate does not model. Kept verbatim so it is
    /// written back unchanged; renders nothing.
    Unknown(PropertyBag),
}

impl CardElement {
    pub(crate) fn parse(source: &Value, context: &mut SerializationContext) -> Option<Self> {
        let Value::Object(bag) = source else {
            context.log_parse_event(
                ValidationEventKind::InvalidPropertyValue,
                Some("TableCell"),
                format!("cell item is not an object: {source}"),
            );
            return None;
        };

        match bag.get(TYPE.name).and_then(Value::as_str) {
            Some(TextBlock::TYPE_NAME) => Some(Self::TextBlock(TextBlock::parse(bag, context))),
            _ => Some(Self::Unknown(bag.clone())),
        }
    }

    pub(crate) fn to_json(&self, context: &SerializationContext) -> Value {
        match self {
            Self::TextBlock(text_block) => Value::Object(text_block.to_json(context)),
            Self::Unknown(bag) => Value::Object(bag.clone()),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::TextBlock(text_block) => text_block.is_visible,
            Self::Unknown(_) => true,
        }
    }
}

impl From<TextBlock> for CardElement {
    fn from(text_block: TextBlock) -> Self {
        Self::TextBlock(text_block)
    }
}

/// Text settings a cell passes down to its items.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextDefaults {
    pub alignment: HorizontalAlignment,
    pub weight: FontWeight,
    pub is_subtle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub id: Option<String>,
    pub text: String,
    pub weight: Option<FontWeight>,
    pub wrap: bool,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub is_visible: bool,
}

const TEXT: PropertyDefinition = PropertyDefinition::new("text", Version::V1_0);
const WEIGHT: PropertyDefinition = PropertyDefinition::new("weight", Version::V1_0);
const WRAP: PropertyDefinition = PropertyDefinition::bool("wrap", Version::V1_0, false);
const HORIZONTAL_ALIGNMENT: PropertyDefinition =
    PropertyDefinition::new("horizontalAlignment", Version::V1_0);
const IS_VISIBLE: PropertyDefinition = PropertyDefinition::bool("isVisible", Version::V1_0, true);

impl TextBlock {
    pub const TYPE_NAME: &'static str = "TextBlock";

    pub const SCHEMA: &'static [PropertyDefinition] =
        &[TYPE, ID, TEXT, WEIGHT, WRAP, HORIZONTAL_ALIGNMENT, IS_VISIBLE];

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            weight: None,
            wrap: false,
            horizontal_alignment: None,
            is_visible: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    fn parse(source: &PropertyBag, context: &mut SerializationContext) -> Self {
        let owner = Self::TYPE_NAME;
        Self {
            id: schema::read_string(source, &ID, owner, context),
            text: schema::read_string(source, &TEXT, owner, context).unwrap_or_default(),
            weight: schema::read_enum(source, &WEIGHT, owner, context),
            wrap: schema::read_bool(source, &WRAP, owner, context),
            horizontal_alignment: schema::read_enum(source, &HORIZONTAL_ALIGNMENT, owner, context),
            is_visible: schema::read_bool(source, &IS_VISIBLE, owner, context),
        }
    }

    fn to_json(&self, context: &SerializationContext) -> PropertyBag {
        let mut target = PropertyBag::new();
        schema::write_string(&mut target, &TYPE, Some(Self::TYPE_NAME));
        schema::write_string(&mut target, &ID, self.id.as_deref());
        schema::write_string(&mut target, &TEXT, Some(&self.text));
        schema::write_enum(&mut target, &WEIGHT, self.weight);
        schema::write_bool(&mut target, &WRAP, self.wrap);
        schema::write_enum(&mut target, &HORIZONTAL_ALIGNMENT, self.horizontal_alignment);
        schema::write_bool(&mut target, &IS_VISIBLE, self.is_visible);
        schema::retain_supported(&mut target, Self::SCHEMA, context);
        target
    }

    /// Empty or hidden text renders nothing.
    pub(crate) fn render(&self, defaults: TextDefaults) -> Option<Element> {
        if !self.is_visible || self.text.is_empty() {
            return None;
        }

        let alignment = self.horizontal_alignment.unwrap_or(defaults.alignment);
        let mut text_style = match self.weight.unwrap_or(defaults.weight) {
            FontWeight::Bolder => TextStyle::new().bold(),
            FontWeight::Lighter => TextStyle::new().dim(),
            FontWeight::Default => TextStyle::new(),
        };
        if defaults.is_subtle {
            text_style = text_style.dim();
        }

        let mut element = Element::text(&self.text)
            .text_align(alignment.to_text_align())
            .text_wrap(if self.wrap { TextWrap::Wrap } else { TextWrap::Truncate })
            .style(Style::new().text_style(text_style));

        if let Some(id) = &self.id {
            element = element.id(id);
        }

        Some(element)
    }
}
