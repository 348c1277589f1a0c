use serde_json::Value;

use super::collection::sealed::{Sealed, Token};
use super::collection::{ElementBase, Parented};
use super::content::{CardElement, TextBlock, TextDefaults};
use super::styling::{Stylable, DEFAULT_STYLE};
use super::{
    CellType, ColumnDefinition, HorizontalAlignment, Spacing, Table, TableRow, VerticalAlignment,
};
use crate::config::{HostConfig, TextStyleDefinition};
use crate::element::Element;
use crate::serialization::schema::{self, ID, STYLE, TYPE};
use crate::serialization::{PropertyBag, PropertyDefinition, SerializationContext, Version};
use crate::types::{BorderLine, Edges, Style};

const ITEMS: PropertyDefinition = PropertyDefinition::new("items", Version::V1_0);
const HORIZONTAL_ALIGNMENT: PropertyDefinition =
    PropertyDefinition::new("horizontalAlignment", Version::V1_0);
const VERTICAL_CONTENT_ALIGNMENT: PropertyDefinition =
    PropertyDefinition::new("verticalContentAlignment", Version::V1_1);

/// A cell of a [`TableRow`].
///
/// The column index and cell type are slot data: the parent row assigns
/// them at the start of every render.
#[derive(Debug, Clone)]
pub struct TableCell {
    base: ElementBase,
    pub id: Option<String>,
    pub items: Vec<CardElement>,
    pub style: Option<String>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub vertical_content_alignment: Option<VerticalAlignment>,
    column_index: Option<usize>,
    cell_type: CellType,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            base: ElementBase::new(),
            id: None,
            items: Vec::new(),
            style: None,
            horizontal_alignment: None,
            vertical_content_alignment: None,
            column_index: None,
            cell_type: CellType::default(),
        }
    }
}

impl Parented for TableCell {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Sealed for TableCell {
    fn base_mut(&mut self, _token: Token) -> &mut ElementBase {
        &mut self.base
    }
}

impl Stylable for TableCell {
    fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl TableCell {
    pub const TYPE_NAME: &'static str = "TableCell";

    pub const SCHEMA: &'static [PropertyDefinition] = &[
        TYPE,
        ID,
        STYLE,
        HORIZONTAL_ALIGNMENT,
        VERTICAL_CONTENT_ALIGNMENT,
        ITEMS,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().item(TextBlock::new(text))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn item(mut self, item: impl Into<CardElement>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    pub fn vertical_content_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_content_alignment = Some(alignment);
        self
    }

    /// Column this cell rendered into last; `None` until its row renders.
    pub fn column_index(&self) -> Option<usize> {
        self.column_index
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Cells only render as part of a row.
    pub const fn is_standalone(&self) -> bool {
        false
    }

    pub(crate) fn assign_slot(&mut self, column_index: usize, cell_type: CellType) {
        self.column_index = Some(column_index);
        self.cell_type = cell_type;
    }

    fn column<'t>(&self, table: &'t Table) -> Option<&'t ColumnDefinition> {
        table.columns().get(self.column_index?)
    }

    /// Horizontal alignment of this cell's content: the cell's own value,
    /// then the row's, the column's, the table's, and finally `Left`.
    pub fn effective_horizontal_alignment(
        &self,
        row: &TableRow,
        table: &Table,
    ) -> HorizontalAlignment {
        self.horizontal_alignment
            .or(row.horizontal_cell_content_alignment)
            .or_else(|| self.column(table)?.horizontal_cell_content_alignment)
            .or(table.horizontal_cell_content_alignment)
            .unwrap_or_default()
    }

    /// Vertical alignment of this cell's content, resolved like
    /// [`effective_horizontal_alignment`](Self::effective_horizontal_alignment)
    /// with `Top` as the last resort.
    pub fn effective_vertical_content_alignment(
        &self,
        row: &TableRow,
        table: &Table,
    ) -> VerticalAlignment {
        self.vertical_content_alignment
            .or(row.vertical_cell_content_alignment)
            .or_else(|| self.column(table)?.vertical_cell_content_alignment)
            .or(table.vertical_cell_content_alignment)
            .unwrap_or_default()
    }

    pub fn effective_text_style(&self, host: &HostConfig) -> TextStyleDefinition {
        match self.cell_type {
            CellType::Header => host.text_styles.column_header,
            CellType::Data => TextStyleDefinition::default(),
        }
    }

    pub(crate) fn parse(source: &PropertyBag, context: &mut SerializationContext) -> Self {
        let owner = Self::TYPE_NAME;
        let items = schema::read_array(source, ITEMS.name)
            .iter()
            .filter_map(|item| CardElement::parse(item, context))
            .collect();

        Self {
            id: schema::read_string(source, &ID, owner, context),
            items,
            style: schema::read_string(source, &STYLE, owner, context),
            horizontal_alignment: schema::read_enum(source, &HORIZONTAL_ALIGNMENT, owner, context),
            vertical_content_alignment: schema::read_enum(
                source,
                &VERTICAL_CONTENT_ALIGNMENT,
                owner,
                context,
            ),
            ..Self::default()
        }
    }

    pub(crate) fn to_json(&self, context: &SerializationContext) -> Value {
        let mut target = PropertyBag::new();
        schema::write_string(&mut target, &TYPE, Some(Self::TYPE_NAME));
        schema::write_string(&mut target, &ID, self.id.as_deref());
        schema::write_string(&mut target, &STYLE, self.style.as_deref());
        schema::write_enum(&mut target, &HORIZONTAL_ALIGNMENT, self.horizontal_alignment);
        schema::write_enum(
            &mut target,
            &VERTICAL_CONTENT_ALIGNMENT,
            self.vertical_content_alignment,
        );
        let items = self.items.iter().map(|item| item.to_json(context)).collect();
        schema::write_array(&mut target, &ITEMS, items);
        schema::retain_supported(&mut target, Self::SCHEMA, context);
        Value::Object(target)
    }

    /// Render this cell in its current slot. Returns `None` when none of
    /// its items produce output.
    pub(crate) fn render(
        &self,
        row: &TableRow,
        table: &Table,
        host: &HostConfig,
    ) -> Option<Element> {
        let text_style = self.effective_text_style(host);
        let defaults = TextDefaults {
            alignment: self.effective_horizontal_alignment(row, table),
            weight: text_style.weight,
            is_subtle: text_style.is_subtle,
        };

        let children: Vec<Element> = self
            .items
            .iter()
            .filter_map(|item| match item {
                CardElement::TextBlock(text_block) => text_block.render(defaults),
                CardElement::Unknown(_) => None,
            })
            .collect();

        if children.is_empty() {
            log::trace!("[cell] {} has no visible content", self.base.id());
            return None;
        }

        let inherited = row.effective_style(host, table.effective_style(host, DEFAULT_STYLE));
        let has_background = self.has_background(host, inherited);
        let has_border = table.show_grid_lines;

        let mut style = Style::new();
        if let Some(color) = self.background_color(host, inherited) {
            style = style.background(color);
        }
        if has_border {
            if let Some(color) = table.grid_border_color(host) {
                let line = BorderLine::solid(1, color);
                style = style.border_right(line).border_bottom(line);
            }
        }

        let padding = if has_background || has_border {
            Edges::all(host.spacing.px(Spacing::Small))
        } else {
            Edges::default()
        };

        let role = match self.cell_type {
            CellType::Header => "columnheader",
            CellType::Data => "cell",
        };

        let mut element = Element::col()
            .attr("role", role)
            .min_width(0)
            .padding(padding)
            .justify(self.effective_vertical_content_alignment(row, table).to_justify())
            .style(style)
            .children(children);

        if self.cell_type == CellType::Header {
            element = element.attr("scope", "col");
        }
        if let Some(id) = &self.id {
            element = element.id(id);
        }

        Some(element)
    }
}
