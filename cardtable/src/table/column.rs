use super::width::ColumnWidth;
use super::{HorizontalAlignment, VerticalAlignment};
use crate::serialization::schema::{
    self, HORIZONTAL_CELL_CONTENT_ALIGNMENT, VERTICAL_CELL_CONTENT_ALIGNMENT,
};
use crate::serialization::{PropertyBag, PropertyDefinition, SerializationContext, Version};

const WIDTH: PropertyDefinition = PropertyDefinition::new("width", Version::V1_0);

/// Requested width and default cell alignment of one table column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnDefinition {
    pub width: ColumnWidth,
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
    computed_width: Option<ColumnWidth>,
}

impl ColumnDefinition {
    pub const SCHEMA_KEY: &'static str = "ColumnDefinition";

    pub const SCHEMA: &'static [PropertyDefinition] = &[
        WIDTH,
        HORIZONTAL_CELL_CONTENT_ALIGNMENT,
        VERTICAL_CELL_CONTENT_ALIGNMENT,
    ];

    pub fn new(width: ColumnWidth) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn weight(weight: f64) -> Self {
        Self::new(ColumnWidth::Weight(weight))
    }

    pub fn pixel(px: f64) -> Self {
        Self::new(ColumnWidth::Pixel(px))
    }

    pub fn horizontal_cell_content_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_cell_content_alignment = Some(alignment);
        self
    }

    pub fn vertical_cell_content_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_cell_content_alignment = Some(alignment);
        self
    }

    /// Width resolved by the last render of the owning table; `None` before
    /// the first render.
    pub fn computed_width(&self) -> Option<ColumnWidth> {
        self.computed_width
    }

    pub(crate) fn set_computed_width(&mut self, width: ColumnWidth) {
        self.computed_width = Some(width);
    }

    pub(crate) fn parse(source: &PropertyBag, context: &mut SerializationContext) -> Self {
        let owner = Self::SCHEMA_KEY;
        Self {
            width: ColumnWidth::from_json(source.get(WIDTH.name), context),
            horizontal_cell_content_alignment: schema::read_enum(
                source,
                &HORIZONTAL_CELL_CONTENT_ALIGNMENT,
                owner,
                context,
            ),
            vertical_cell_content_alignment: schema::read_enum(
                source,
                &VERTICAL_CELL_CONTENT_ALIGNMENT,
                owner,
                context,
            ),
            computed_width: None,
        }
    }

    pub(crate) fn to_json(&self, context: &SerializationContext) -> PropertyBag {
        let mut target = PropertyBag::new();
        schema::write_value(&mut target, &WIDTH, self.width.to_json());
        schema::write_enum(
            &mut target,
            &HORIZONTAL_CELL_CONTENT_ALIGNMENT,
            self.horizontal_cell_content_alignment,
        );
        schema::write_enum(
            &mut target,
            &VERTICAL_CELL_CONTENT_ALIGNMENT,
            self.vertical_cell_content_alignment,
        );
        schema::retain_supported(&mut target, Self::SCHEMA, context);
        target
    }
}
