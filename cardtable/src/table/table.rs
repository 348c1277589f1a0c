use std::ops::{Deref, DerefMut};

use serde_json::Value;

use super::collection::sealed::{Sealed, Token};
use super::collection::{ElementBase, ItemCollection, ItemMut, Parented};
use super::styling::{Stylable, DEFAULT_STYLE};
use super::width::compute_column_widths;
use super::{
    collection_entry, ColumnDefinition, ElementId, HorizontalAlignment, Spacing, TableRow,
    VerticalAlignment,
};
use crate::config::HostConfig;
use crate::element::Element;
use crate::error::{Rejected, TableError};
use crate::serialization::schema::{
    self, HORIZONTAL_CELL_CONTENT_ALIGNMENT, ID, STYLE, TYPE, VERTICAL_CELL_CONTENT_ALIGNMENT,
};
use crate::serialization::{
    PropertyBag, PropertyDefinition, SerializationContext, ValidationEventKind, Version,
};
use crate::types::{BorderLine, Color, Edges, Size, Style};

const COLUMNS: PropertyDefinition = PropertyDefinition::new("columns", Version::V1_0);
const ROWS: PropertyDefinition = PropertyDefinition::new("rows", Version::V1_0);
const FIRST_ROW_AS_HEADERS: PropertyDefinition =
    PropertyDefinition::bool("firstRowAsHeaders", Version::V1_0, true);
const SHOW_GRID_LINES: PropertyDefinition =
    PropertyDefinition::bool("showGridLines", Version::V1_0, true);
const GRID_STYLE: PropertyDefinition = PropertyDefinition::new("gridStyle", Version::V1_0);

/// A table element.
///
/// Every row holds at least as many cells as there are columns: adding a
/// column, adding a row, editing a row through [`row_mut`](Self::row_mut)
/// and parsing all fill short rows with empty cells.
///
/// # Example
///
/// ```
/// use cardtable::config::HostConfig;
/// use cardtable::table::{ColumnDefinition, Table, TableRow};
///
/// let mut table = Table::new();
/// table.add_column(ColumnDefinition::weight(2.0));
/// table.add_column(ColumnDefinition::pixel(80.0));
/// table.add_row(TableRow::from_texts(["Name", "Qty"])).unwrap();
/// table.add_row(TableRow::from_texts(["Widget", "3"])).unwrap();
///
/// let rendered = table.render(&HostConfig::default());
/// assert!(rendered.is_some());
/// ```
#[derive(Debug)]
pub struct Table {
    base: ElementBase,
    pub id: Option<String>,
    pub style: Option<String>,
    pub first_row_as_headers: bool,
    pub show_grid_lines: bool,
    /// Container style whose border colour draws the grid, as written in
    /// the document. See [`resolved_grid_style`](Self::resolved_grid_style).
    pub grid_style: Option<String>,
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
    columns: Vec<ColumnDefinition>,
    rows: ItemCollection<TableRow>,
}

impl Default for Table {
    fn default() -> Self {
        let base = ElementBase::new();
        let rows = ItemCollection::new(base.id());
        Self {
            base,
            id: None,
            style: None,
            first_row_as_headers: FIRST_ROW_AS_HEADERS.default_bool(),
            show_grid_lines: SHOW_GRID_LINES.default_bool(),
            grid_style: None,
            horizontal_cell_content_alignment: None,
            vertical_cell_content_alignment: None,
            columns: Vec::new(),
            rows,
        }
    }
}

/// A clone is a separate table with its own identity; its rows and their
/// cells are cloned too and belong to the clone.
impl Clone for Table {
    fn clone(&self) -> Self {
        let base = self.base.clone();
        let rows = self.rows.clone_for(base.id());
        Self {
            base,
            id: self.id.clone(),
            style: self.style.clone(),
            first_row_as_headers: self.first_row_as_headers,
            show_grid_lines: self.show_grid_lines,
            grid_style: self.grid_style.clone(),
            horizontal_cell_content_alignment: self.horizontal_cell_content_alignment,
            vertical_cell_content_alignment: self.vertical_cell_content_alignment,
            columns: self.columns.clone(),
            rows,
        }
    }
}

impl Parented for Table {
    fn base(&self) -> &ElementBase {
        &self.base
    }
}

impl Sealed for Table {
    fn base_mut(&mut self, _token: Token) -> &mut ElementBase {
        &mut self.base
    }
}

impl Stylable for Table {
    fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl Table {
    pub const TYPE_NAME: &'static str = "Table";

    pub const SCHEMA: &'static [PropertyDefinition] = &[
        TYPE,
        ID,
        STYLE,
        COLUMNS,
        ROWS,
        FIRST_ROW_AS_HEADERS,
        SHOW_GRID_LINES,
        GRID_STYLE,
        HORIZONTAL_CELL_CONTENT_ALIGNMENT,
        VERTICAL_CELL_CONTENT_ALIGNMENT,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn first_row_as_headers(mut self, first_row_as_headers: bool) -> Self {
        self.first_row_as_headers = first_row_as_headers;
        self
    }

    pub fn show_grid_lines(mut self, show_grid_lines: bool) -> Self {
        self.show_grid_lines = show_grid_lines;
        self
    }

    pub fn grid_style(mut self, grid_style: impl Into<String>) -> Self {
        self.grid_style = Some(grid_style.into());
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

    /// The grid style if the host knows it, else `None`.
    pub fn resolved_grid_style(&self, host: &HostConfig) -> Option<&str> {
        self.grid_style
            .as_deref()
            .filter(|name| host.container_styles.contains(name))
    }

    /// Border colour of the grid style, falling back to the default style.
    pub fn grid_border_color(&self, host: &HostConfig) -> Option<Color> {
        host.container_styles
            .get_or_default(self.resolved_grid_style(host))
            .border_color()
    }

    // Columns

    /// Append a column and top every row up to the new column count.
    pub fn add_column(&mut self, column: ColumnDefinition) {
        self.columns.push(column);
        self.ensure_rows_have_enough_cells();
    }

    /// Remove the column at `index`. Rows keep their cells.
    pub fn remove_column(&mut self, index: usize) -> Result<ColumnDefinition, TableError> {
        if index >= self.columns.len() {
            return Err(TableError::out_of_range(index, self.columns.len()));
        }
        Ok(self.columns.remove(index))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_at(&self, index: usize) -> Result<&ColumnDefinition, TableError> {
        self.columns
            .get(index)
            .ok_or_else(|| TableError::out_of_range(index, self.columns.len()))
    }

    pub fn column_at_mut(&mut self, index: usize) -> Result<&mut ColumnDefinition, TableError> {
        let count = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or_else(|| TableError::out_of_range(index, count))
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    // Rows

    /// Append a row, topping it up to the column count. A row that already
    /// belongs to a table is handed back untouched.
    pub fn add_row(&mut self, row: TableRow) -> Result<(), Rejected<TableRow>> {
        self.rows.add(row)?;
        if let Some(row) = self.rows.last_mut() {
            row.ensure_has_enough_cells(self.columns.len());
        }
        Ok(())
    }

    /// Detach a row, handing it back with its parent cleared.
    pub fn remove_row(&mut self, row: ElementId) -> Option<TableRow> {
        self.rows.remove(row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.count()
    }

    pub fn row_at(&self, index: usize) -> Result<&TableRow, TableError> {
        self.rows.at(index)
    }

    /// Mutable access to a row. The row is topped up to the column count
    /// when the guard is dropped.
    pub fn row_mut(&mut self, index: usize) -> Result<RowMut<'_>, TableError> {
        let column_count = self.columns.len();
        let row = self.rows.at_mut(index)?;
        Ok(RowMut { row, column_count })
    }

    pub fn rows(&self) -> &ItemCollection<TableRow> {
        &self.rows
    }

    pub fn is_first_row(&self, row: &TableRow) -> bool {
        self.rows
            .first()
            .is_some_and(|first| first.element_id() == row.element_id())
    }

    fn ensure_rows_have_enough_cells(&mut self) {
        let column_count = self.columns.len();
        for row in self.rows.iter_mut() {
            row.ensure_has_enough_cells(column_count);
        }
    }

    /// Whether a row or cell was removed since the last render.
    pub fn needs_layout(&self) -> bool {
        self.rows.needs_layout() || self.rows.iter().any(TableRow::needs_layout)
    }

    // Alignment lookups by position

    pub fn cell_horizontal_alignment(
        &self,
        row_index: usize,
        cell_index: usize,
    ) -> Result<HorizontalAlignment, TableError> {
        let row = self.rows.at(row_index)?;
        let cell = row.cell_at(cell_index)?;
        Ok(cell.effective_horizontal_alignment(row, self))
    }

    pub fn cell_vertical_alignment(
        &self,
        row_index: usize,
        cell_index: usize,
    ) -> Result<VerticalAlignment, TableError> {
        let row = self.rows.at(row_index)?;
        let cell = row.cell_at(cell_index)?;
        Ok(cell.effective_vertical_content_alignment(row, self))
    }

    // Rendering

    /// Resolve every column's computed width from the requested widths.
    pub fn update_column_widths(&mut self) {
        let requested: Vec<_> = self.columns.iter().map(|column| column.width).collect();
        let computed = compute_column_widths(&requested);

        for (column, width) in self.columns.iter_mut().zip(computed) {
            column.set_computed_width(width);
        }
    }

    /// Render the table. Returns `None` when the table has no rows.
    ///
    /// Column widths are resolved first and every cell gets its slot for
    /// this pass before any row renders.
    pub fn render(&mut self, host: &HostConfig) -> Option<Element> {
        if self.rows.is_empty() {
            log::debug!("[table] {} has no rows, nothing to render", self.base.id());
            return None;
        }

        self.update_column_widths();

        let column_count = self.columns.len();
        let headers = self.first_row_as_headers;
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.assign_slots(column_count, headers && index == 0);
            row.clear_layout_flag();
        }
        self.rows.clear_layout_flag();

        let element = self.render_element(host);
        log::debug!(
            "[table] {} rendered: rows={} columns={} grid={}",
            self.base.id(),
            self.rows.count(),
            column_count,
            self.show_grid_lines,
        );
        Some(element)
    }

    fn render_element(&self, host: &HostConfig) -> Element {
        let cell_spacing = host.table.cell_spacing;

        let mut style = Style::new();
        let mut padding = Edges::default();
        if let Some(color) = self.background_color(host, DEFAULT_STYLE) {
            style = style.background(color);
            padding = Edges::all(host.spacing.px(Spacing::Padding));
        }
        if self.show_grid_lines {
            if let Some(color) = self.grid_border_color(host) {
                let line = BorderLine::solid(1, color);
                style = style.border_top(line).border_left(line);
            }
        }

        let mut element = Element::col()
            .attr("role", "table")
            .padding(padding)
            .style(style);
        if let Some(id) = &self.id {
            element = element.id(id);
        }

        for (index, row) in self.rows.iter().enumerate() {
            let Some(rendered) = row.render(self, host) else {
                continue;
            };

            if index > 0 && !self.show_grid_lines && cell_spacing > 0 {
                element.push_child(
                    Element::box_()
                        .attr("aria-hidden", "true")
                        .height(Size::Px(f32::from(cell_spacing))),
                );
            }

            element.push_child(rendered);
        }

        element
    }

    // Serialization

    /// Read a table from a JSON document.
    pub fn from_json(json: &str, context: &mut SerializationContext) -> Result<Self, TableError> {
        let source: Value = serde_json::from_str(json)?;
        Self::parse(&source, context)
    }

    /// Read a table from a parsed JSON value. Schema problems are recorded
    /// on `context`; only a value that is not a table object is an error.
    pub fn parse(source: &Value, context: &mut SerializationContext) -> Result<Self, TableError> {
        let Value::Object(bag) = source else {
            return Err(TableError::InvalidDocument(format!(
                "expected an object, found {source}"
            )));
        };

        match bag.get(TYPE.name) {
            None => {}
            Some(Value::String(type_name)) if type_name == Self::TYPE_NAME => {}
            Some(other) => {
                return Err(TableError::InvalidDocument(format!(
                    "expected type \"{}\", found {other}",
                    Self::TYPE_NAME
                )));
            }
        }

        let owner = Self::TYPE_NAME;
        let mut table = Self {
            id: schema::read_string(bag, &ID, owner, context),
            style: schema::read_string(bag, &STYLE, owner, context),
            first_row_as_headers: schema::read_bool(bag, &FIRST_ROW_AS_HEADERS, owner, context),
            show_grid_lines: schema::read_bool(bag, &SHOW_GRID_LINES, owner, context),
            grid_style: schema::read_string(bag, &GRID_STYLE, owner, context),
            horizontal_cell_content_alignment: schema::read_enum(
                bag,
                &HORIZONTAL_CELL_CONTENT_ALIGNMENT,
                owner,
                context,
            ),
            vertical_cell_content_alignment: schema::read_enum(
                bag,
                &VERTICAL_CELL_CONTENT_ALIGNMENT,
                owner,
                context,
            ),
            ..Self::default()
        };

        for entry in schema::read_array(bag, COLUMNS.name) {
            match entry {
                Value::Object(column) => {
                    table.columns.push(ColumnDefinition::parse(column, context));
                }
                other => context.log_parse_event(
                    ValidationEventKind::InvalidPropertyValue,
                    Some(owner),
                    format!("expected a column object, found {other}"),
                ),
            }
        }

        for entry in schema::read_array(bag, ROWS.name) {
            if let Some(row) = collection_entry(entry, TableRow::TYPE_NAME, owner, context) {
                table.rows.adopt(TableRow::parse(row, context));
            }
        }

        table.ensure_rows_have_enough_cells();

        log::debug!(
            "[table] parsed {} columns, {} rows ({} warnings)",
            table.columns.len(),
            table.rows.count(),
            context.events().len(),
        );

        Ok(table)
    }

    /// Write the table as a JSON value. Computed widths are never written.
    pub fn to_json(&self, context: &SerializationContext) -> Value {
        let mut target = PropertyBag::new();
        schema::write_string(&mut target, &TYPE, Some(Self::TYPE_NAME));
        schema::write_string(&mut target, &ID, self.id.as_deref());
        schema::write_string(&mut target, &STYLE, self.style.as_deref());

        let columns = self
            .columns
            .iter()
            .map(|column| Value::Object(column.to_json(context)))
            .collect();
        schema::write_array(&mut target, &COLUMNS, columns);

        let rows = self.rows.iter().map(|row| row.to_json(context)).collect();
        schema::write_array(&mut target, &ROWS, rows);

        schema::write_bool(&mut target, &FIRST_ROW_AS_HEADERS, self.first_row_as_headers);
        schema::write_bool(&mut target, &SHOW_GRID_LINES, self.show_grid_lines);
        schema::write_string(&mut target, &GRID_STYLE, self.grid_style.as_deref());
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
        Value::Object(target)
    }

    pub fn to_json_string(&self, context: &SerializationContext) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(&self.to_json(context))?)
    }
}

/// Mutable borrow of a table row that restores the cell-count invariant
/// when dropped. Whatever row is in the slot by then belongs to the table.
pub struct RowMut<'a> {
    row: ItemMut<'a, TableRow>,
    column_count: usize,
}

impl Deref for RowMut<'_> {
    type Target = TableRow;

    fn deref(&self) -> &TableRow {
        &self.row
    }
}

impl DerefMut for RowMut<'_> {
    fn deref_mut(&mut self) -> &mut TableRow {
        &mut self.row
    }
}

impl Drop for RowMut<'_> {
    fn drop(&mut self) {
        self.row.ensure_has_enough_cells(self.column_count);
    }
}
