use serde_json::Value;

use super::collection::sealed::{Sealed, Token};
use super::collection::{ElementBase, ItemCollection, ItemMut, Parented};
use super::styling::Stylable;
use super::width::ColumnWidth;
use super::{
    collection_entry, CellType, ElementId, HorizontalAlignment, Table, TableCell, VerticalAlignment,
};
use crate::config::HostConfig;
use crate::element::Element;
use crate::error::{Rejected, TableError};
use crate::serialization::schema::{
    self, HORIZONTAL_CELL_CONTENT_ALIGNMENT, ID, STYLE, TYPE, VERTICAL_CELL_CONTENT_ALIGNMENT,
};
use crate::serialization::{PropertyBag, PropertyDefinition, SerializationContext, Version};
use crate::types::{Edges, Size, Style};

const CELLS: PropertyDefinition = PropertyDefinition::new("cells", Version::V1_0);

/// A row of a [`Table`]: an ordered collection of cells.
#[derive(Debug)]
pub struct TableRow {
    base: ElementBase,
    pub id: Option<String>,
    pub style: Option<String>,
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
    cells: ItemCollection<TableCell>,
}

impl Default for TableRow {
    fn default() -> Self {
        let base = ElementBase::new();
        let cells = ItemCollection::new(base.id());
        Self {
            base,
            id: None,
            style: None,
            horizontal_cell_content_alignment: None,
            vertical_cell_content_alignment: None,
            cells,
        }
    }
}

/// A clone is a detached row with its own identity; its cells are cloned
/// too and belong to the clone.
impl Clone for TableRow {
    fn clone(&self) -> Self {
        let base = self.base.clone();
        let cells = self.cells.clone_for(base.id());
        Self {
            base,
            id: self.id.clone(),
            style: self.style.clone(),
            horizontal_cell_content_alignment: self.horizontal_cell_content_alignment,
            vertical_cell_content_alignment: self.vertical_cell_content_alignment,
            cells,
        }
    }
}

impl Parented for TableRow {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Sealed for TableRow {
    fn base_mut(&mut self, _token: Token) -> &mut ElementBase {
        &mut self.base
    }
}

impl Stylable for TableRow {
    fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl TableRow {
    pub const TYPE_NAME: &'static str = "TableRow";

    pub const SCHEMA: &'static [PropertyDefinition] = &[
        TYPE,
        ID,
        STYLE,
        HORIZONTAL_CELL_CONTENT_ALIGNMENT,
        VERTICAL_CELL_CONTENT_ALIGNMENT,
        CELLS,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// A row with one text cell per entry.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::new();
        for text in texts {
            row.cells.adopt(TableCell::text(text));
        }
        row
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn horizontal_cell_content_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_cell_content_alignment = Some(alignment);
        self
    }

    pub fn vertical_cell_content_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_cell_content_alignment = Some(alignment);
        self
    }

    /// Append a cell. A cell that already belongs to a row is handed back.
    pub fn add_cell(&mut self, cell: TableCell) -> Result<(), Rejected<TableCell>> {
        self.cells.add(cell)
    }

    /// Detach a cell, handing it back with its parent cleared.
    pub fn remove_cell(&mut self, cell: ElementId) -> Option<TableCell> {
        self.cells.remove(cell)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.count()
    }

    pub fn cell_at(&self, index: usize) -> Result<&TableCell, TableError> {
        self.cells.at(index)
    }

    pub fn cell_at_mut(&mut self, index: usize) -> Result<ItemMut<'_, TableCell>, TableError> {
        self.cells.at_mut(index)
    }

    pub fn cells(&self) -> &ItemCollection<TableCell> {
        &self.cells
    }

    /// Append empty cells until the row has at least `count` of them.
    pub fn ensure_has_enough_cells(&mut self, count: usize) {
        while self.cells.count() < count {
            self.cells.adopt(TableCell::new());
        }
    }

    /// Rows only render as part of a table.
    pub const fn is_standalone(&self) -> bool {
        false
    }

    /// Whether a cell was removed since the last render.
    pub fn needs_layout(&self) -> bool {
        self.cells.needs_layout()
    }

    pub(crate) fn clear_layout_flag(&mut self) {
        self.cells.clear_layout_flag();
    }

    /// Give each renderable cell its column index and type for this pass.
    pub(crate) fn assign_slots(&mut self, column_count: usize, is_header_row: bool) {
        let cell_type = if is_header_row {
            CellType::Header
        } else {
            CellType::Data
        };

        for (index, cell) in self.cells.iter_mut().take(column_count).enumerate() {
            cell.assign_slot(index, cell_type);
        }
    }

    pub(crate) fn parse(source: &PropertyBag, context: &mut SerializationContext) -> Self {
        let owner = Self::TYPE_NAME;
        let mut row = Self {
            id: schema::read_string(source, &ID, owner, context),
            style: schema::read_string(source, &STYLE, owner, context),
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
            ..Self::default()
        };

        for entry in schema::read_array(source, CELLS.name) {
            if let Some(bag) = collection_entry(entry, TableCell::TYPE_NAME, owner, context) {
                row.cells.adopt(TableCell::parse(bag, context));
            }
        }

        row
    }

    pub(crate) fn to_json(&self, context: &SerializationContext) -> Value {
        let mut target = PropertyBag::new();
        schema::write_string(&mut target, &TYPE, Some(Self::TYPE_NAME));
        schema::write_string(&mut target, &ID, self.id.as_deref());
        schema::write_string(&mut target, &STYLE, self.style.as_deref());
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
        let cells = self.cells.iter().map(|cell| cell.to_json(context)).collect();
        schema::write_array(&mut target, &CELLS, cells);
        schema::retain_supported(&mut target, Self::SCHEMA, context);
        Value::Object(target)
    }

    /// Render the cells that have a column, sized by the column widths the
    /// table resolved for this pass. Cells past the last column are not
    /// rendered. Returns `None` when no cell produced output.
    pub(crate) fn render(&self, table: &Table, host: &HostConfig) -> Option<Element> {
        let cell_spacing = host.table.cell_spacing;

        let mut style = Style::new();
        if let Some(color) = self.style_definition(host).background_color() {
            style = style.background(color);
        }

        let mut element = Element::row()
            .attr("role", "row")
            .padding(Edges::default())
            .style(style);
        if let Some(id) = &self.id {
            element = element.id(id);
        }

        for (index, (cell, column)) in self.cells.iter().zip(table.columns()).enumerate() {
            let Some(rendered) = cell.render(self, table, host) else {
                continue;
            };

            let width = column.computed_width().unwrap_or(column.width);
            let mut rendered = match width {
                ColumnWidth::Pixel(px) => rendered.flex(0, 0, Size::Px(px as f32)),
                ColumnWidth::Weight(percent) => rendered.flex(1, 1, Size::Percent(percent as f32)),
            };

            if index > 0 && !table.show_grid_lines && cell_spacing > 0 {
                rendered = rendered.margin(Edges::left(cell_spacing));
            }

            element.push_child(rendered);
        }

        if element.child_count() == 0 {
            log::trace!("[row] {} rendered no cells", self.base.id());
            return None;
        }

        Some(element)
    }
}
