use cardtable::config::{ContainerStyleDefinition, TextStyleDefinition};
use cardtable::element::find_by_attr;
use cardtable::table::{
    CellType, ColumnDefinition, FontWeight, HorizontalAlignment, Table, TableCell, TableRow,
    TextBlock, VerticalAlignment,
};
use cardtable::types::{Color, Direction, Edges, Justify, Size, TextAlign, TextWrap};
use cardtable::{Element, HostConfig};

fn table_of(columns: &[ColumnDefinition], rows: &[&[&str]]) -> Table {
    let mut table = Table::new();
    for column in columns {
        table.add_column(column.clone());
    }
    for texts in rows {
        table.add_row(TableRow::from_texts(texts.iter().copied())).unwrap();
    }
    table
}

fn weights(count: usize) -> Vec<ColumnDefinition> {
    (0..count).map(|_| ColumnDefinition::weight(1.0)).collect()
}

fn rendered_rows(root: &Element) -> Vec<&Element> {
    find_by_attr(root, "role", "row")
}

fn first_text(cell: &Element) -> &Element {
    &cell.content.children()[0]
}

const GRID_GRAY: Color = Color::rgb(0xCC, 0xCC, 0xCC);

// ============================================================================
// Empty Output Tests
// ============================================================================

#[test]
fn test_table_without_rows_renders_nothing() {
    let mut table = table_of(&weights(2), &[]);
    assert!(table.render(&HostConfig::default()).is_none());
}

#[test]
fn test_row_without_content_is_dropped() {
    let mut table = table_of(&weights(2), &[&["", ""], &["a", "b"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    let rows = rendered_rows(&root);
    assert_eq!(rows.len(), 1);
    assert_eq!(root.child_count(), 1);
}

#[test]
fn test_hidden_text_renders_nothing() {
    let mut table = table_of(&weights(1), &[]);
    let mut row = TableRow::new();
    row.add_cell(TableCell::new().item(TextBlock::new("secret").visible(false)))
        .unwrap();
    table.add_row(row).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    assert!(rendered_rows(&root).is_empty());
}

#[test]
fn test_empty_cell_emits_no_slot() {
    let mut table = table_of(&weights(3), &[&["a", "", "c"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    assert_eq!(rendered_rows(&root)[0].child_count(), 2);
}

#[test]
fn test_table_stacks_rows_and_rows_lay_out_cells() {
    let mut table = table_of(&weights(2), &[&["a", "b"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    assert_eq!(root.direction, Direction::Column);
    assert_eq!(rendered_rows(&root)[0].direction, Direction::Row);
    assert_eq!(rendered_rows(&root)[0].padding, Edges::default());
}

// ============================================================================
// Header Tests
// ============================================================================

#[test]
fn test_only_first_row_is_header() {
    let mut table = table_of(&weights(2), &[&["Name", "Qty"], &["a", "1"], &["b", "2"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    let headers = find_by_attr(&root, "role", "columnheader");
    assert_eq!(headers.len(), 2);
    assert!(headers.iter().all(|cell| cell.get_attr("scope") == Some("col")));
    assert_eq!(find_by_attr(&root, "role", "cell").len(), 4);

    for (index, row) in table.rows().iter().enumerate() {
        let expected = if index == 0 { CellType::Header } else { CellType::Data };
        assert!(row.cells().iter().all(|cell| cell.cell_type() == expected));
    }
}

#[test]
fn test_headers_disabled() {
    let mut table = table_of(&weights(2), &[&["a", "b"], &["c", "d"]]).first_row_as_headers(false);
    let root = table.render(&HostConfig::default()).unwrap();

    assert!(find_by_attr(&root, "role", "columnheader").is_empty());
    assert!(
        find_by_attr(&root, "role", "cell")
            .iter()
            .all(|cell| cell.get_attr("scope").is_none())
    );
}

#[test]
fn test_header_text_is_bold_unless_overridden() {
    let mut table = table_of(&weights(2), &[]);
    let mut header = TableRow::new();
    header.add_cell(TableCell::text("Bold")).unwrap();
    header
        .add_cell(TableCell::new().item(TextBlock::new("Plain").weight(FontWeight::Default)))
        .unwrap();
    table.add_row(header).unwrap();
    table.add_row(TableRow::from_texts(["x", "y"])).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    let headers = find_by_attr(&root, "role", "columnheader");
    assert!(first_text(headers[0]).style.text_style.bold);
    assert!(!first_text(headers[1]).style.text_style.bold);

    let cells = find_by_attr(&root, "role", "cell");
    assert!(!first_text(cells[0]).style.text_style.bold);
}

#[test]
fn test_subtle_header_style_dims_header_text() {
    let mut table = table_of(&weights(1), &[&["Name"], &["Widget"]]);
    let host = HostConfig::default().with_column_header_style(TextStyleDefinition {
        weight: FontWeight::Default,
        is_subtle: true,
    });
    let root = table.render(&host).unwrap();

    let header = first_text(find_by_attr(&root, "role", "columnheader")[0]);
    assert!(header.style.text_style.dim);
    assert!(!header.style.text_style.bold);

    let cell = first_text(find_by_attr(&root, "role", "cell")[0]);
    assert!(!cell.style.text_style.dim);
}

#[test]
fn test_slots_follow_row_positions() {
    let mut table = table_of(&weights(2), &[&["a", "b", "c"]]);
    table.render(&HostConfig::default());

    let row = table.row_at(0).unwrap();
    assert_eq!(row.cell_at(0).unwrap().column_index(), Some(0));
    assert_eq!(row.cell_at(1).unwrap().column_index(), Some(1));
    assert_eq!(row.cell_at(2).unwrap().column_index(), None, "excess cell has no slot");
}

// ============================================================================
// Grid Line Tests
// ============================================================================

#[test]
fn test_grid_borders() {
    let mut table = table_of(&weights(2), &[&["a", "b"], &["c", "d"]]);
    let host = HostConfig::default();
    let root = table.render(&host).unwrap();

    assert_eq!(root.get_attr("role"), Some("table"));
    assert_eq!(root.style.border.top.map(|line| line.color), Some(GRID_GRAY));
    assert_eq!(root.style.border.left.map(|line| line.width), Some(1));
    assert!(root.style.border.right.is_none());
    assert!(root.style.border.bottom.is_none());

    for cell in find_by_attr(&root, "role", "cell") {
        assert_eq!(cell.style.border.right.map(|line| line.color), Some(GRID_GRAY));
        assert_eq!(cell.style.border.bottom.map(|line| line.width), Some(1));
        assert!(cell.style.border.top.is_none());
        assert_eq!(cell.padding, Edges::all(host.spacing.small));
        assert_eq!(cell.margin, Edges::default());
    }

    assert!(find_by_attr(&root, "aria-hidden", "true").is_empty());
}

#[test]
fn test_grid_style_picks_border_color() {
    let mut table = table_of(&weights(1), &[&["a"]]).grid_style("accent");
    let root = table.render(&HostConfig::default()).unwrap();

    assert_eq!(
        root.style.border.top.map(|line| line.color),
        Some(Color::rgb(0x62, 0xA8, 0xF7))
    );
}

#[test]
fn test_unknown_grid_style_uses_default_border() {
    let mut table = table_of(&weights(1), &[&["a"]]).grid_style("nope");
    let host = HostConfig::default();

    assert_eq!(table.resolved_grid_style(&host), None);
    let root = table.render(&host).unwrap();
    assert_eq!(root.style.border.top.map(|line| line.color), Some(GRID_GRAY));
}

#[test]
fn test_unparseable_border_color_draws_no_border() {
    let host = HostConfig::default().with_container_style(
        "broken",
        ContainerStyleDefinition::new().border("not a colour"),
    );
    let mut table = table_of(&weights(1), &[&["a"]]).grid_style("broken");
    let root = table.render(&host).unwrap();

    assert!(root.style.border.top.is_none());
    assert!(find_by_attr(&root, "role", "columnheader")[0].style.border.right.is_none());
}

// ============================================================================
// Spacing Tests
// ============================================================================

#[test]
fn test_spacers_and_margins_without_grid() {
    let rows: &[&[&str]] = &[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]];
    let mut table = table_of(&weights(3), rows).show_grid_lines(false);
    let root = table.render(&HostConfig::default()).unwrap();

    let spacers = find_by_attr(&root, "aria-hidden", "true");
    assert_eq!(spacers.len(), 2);
    assert!(spacers.iter().all(|spacer| spacer.height == Size::Px(8.0)));
    assert_eq!(root.child_count(), 5);
    assert!(root.content.children()[0].get_attr("role") == Some("row"));
    assert!(root.content.children()[1].get_attr("aria-hidden") == Some("true"));

    for row in rendered_rows(&root) {
        let margins: Vec<u16> = row
            .content
            .children()
            .iter()
            .map(|cell| cell.margin.left)
            .collect();
        assert_eq!(margins, [0, 8, 8]);
        assert!(row.content.children().iter().all(|cell| cell.padding == Edges::default()));
    }

    assert!(root.style.border.top.is_none());
}

#[test]
fn test_zero_spacing_adds_no_gaps() {
    let mut table = table_of(&weights(2), &[&["a", "b"], &["c", "d"]]).show_grid_lines(false);
    let root = table.render(&HostConfig::default().with_cell_spacing(0)).unwrap();

    assert!(find_by_attr(&root, "aria-hidden", "true").is_empty());
    for row in rendered_rows(&root) {
        assert!(row.content.children().iter().all(|cell| cell.margin == Edges::default()));
    }
}

#[test]
fn test_spacer_follows_row_position() {
    let mut table = table_of(&weights(1), &[&[""], &["a"]]).show_grid_lines(false);
    let root = table.render(&HostConfig::default()).unwrap();

    // row 0 renders nothing; row 1 is not the first row, so it keeps its spacer
    assert_eq!(root.child_count(), 2);
    assert_eq!(root.content.children()[0].get_attr("aria-hidden"), Some("true"));
}

// ============================================================================
// Sizing Tests
// ============================================================================

#[test]
fn test_pixel_and_weight_flex() {
    let columns = [
        ColumnDefinition::pixel(80.0),
        ColumnDefinition::weight(1.0),
        ColumnDefinition::weight(3.0),
    ];
    let mut table = table_of(&columns, &[&["a", "b", "c"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    let cells = rendered_rows(&root)[0].content.children();
    assert_eq!((cells[0].flex_grow, cells[0].flex_shrink), (0, 0));
    assert_eq!(cells[0].flex_basis, Size::Px(80.0));
    assert_eq!((cells[1].flex_grow, cells[1].flex_shrink), (1, 1));
    assert_eq!(cells[1].flex_basis, Size::Percent(25.0));
    assert_eq!(cells[2].flex_basis, Size::Percent(75.0));
    assert!(cells.iter().all(|cell| cell.min_width == Some(0)));
}

#[test]
fn test_excess_cells_are_not_rendered() {
    let mut table = table_of(&weights(2), &[&["a", "b", "c", "d"]]);
    let root = table.render(&HostConfig::default()).unwrap();

    assert_eq!(rendered_rows(&root)[0].child_count(), 2);
    assert_eq!(table.row_at(0).unwrap().cell_count(), 4, "model keeps every cell");
}

// ============================================================================
// Content Tests
// ============================================================================

#[test]
fn test_text_alignment_and_justify() {
    let mut table = table_of(&weights(2), &[])
        .horizontal_cell_content_alignment(HorizontalAlignment::Right)
        .vertical_cell_content_alignment(VerticalAlignment::Bottom);
    let mut row = TableRow::new();
    row.add_cell(TableCell::text("a")).unwrap();
    let centered = TextBlock::new("b").horizontal_alignment(HorizontalAlignment::Center);
    row.add_cell(TableCell::new().item(centered)).unwrap();
    table.add_row(row).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    let cells = rendered_rows(&root)[0].content.children();

    assert_eq!(first_text(&cells[0]).text_align, TextAlign::Right);
    assert_eq!(first_text(&cells[1]).text_align, TextAlign::Center);
    assert!(cells.iter().all(|cell| cell.justify == Justify::End));
}

#[test]
fn test_wrap_maps_to_text_wrap() {
    let mut table = table_of(&weights(2), &[]);
    let mut row = TableRow::new();
    row.add_cell(TableCell::new().item(TextBlock::new("long").wrap(true))).unwrap();
    row.add_cell(TableCell::text("short")).unwrap();
    table.add_row(row).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    let cells = rendered_rows(&root)[0].content.children();
    assert_eq!(first_text(&cells[0]).text_wrap, TextWrap::Wrap);
    assert_eq!(first_text(&cells[1]).text_wrap, TextWrap::Truncate);
    assert_eq!(first_text(&cells[1]).content.text(), Some("short"));
}

#[test]
fn test_ids_are_carried_to_nodes() {
    let mut table = table_of(&weights(1), &[]).id("prices");
    let mut row = TableRow::new().id("header");
    row.add_cell(TableCell::text("a").id("first")).unwrap();
    table.add_row(row).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    assert_eq!(root.id, "prices");
    assert!(cardtable::element::find_element(&root, "header").is_some());
    assert!(cardtable::element::find_element(&root, "first").is_some());
}

// ============================================================================
// Background Tests
// ============================================================================

#[test]
fn test_styled_table_gets_background_and_padding() {
    let mut table = table_of(&weights(1), &[&["a"]]).style("accent");
    let host = HostConfig::default();
    let root = table.render(&host).unwrap();

    assert_eq!(root.style.background, Some(Color::rgb(0xC7, 0xDE, 0xF9)));
    assert_eq!(root.padding, Edges::all(host.spacing.padding));
}

#[test]
fn test_default_table_has_no_background() {
    let mut table = table_of(&weights(1), &[&["a"]]).style("Default");
    let root = table.render(&HostConfig::default()).unwrap();

    assert_eq!(root.style.background, None);
    assert_eq!(root.padding, Edges::default());
}

#[test]
fn test_row_background_falls_back_to_default_style() {
    let mut table = table_of(&weights(1), &[]);
    table.add_row(TableRow::from_texts(["a"])).unwrap();
    table.add_row(TableRow::from_texts(["b"]).style("good")).unwrap();
    table.add_row(TableRow::from_texts(["c"]).style("unknown")).unwrap();

    let root = table.render(&HostConfig::default()).unwrap();
    let backgrounds: Vec<_> = rendered_rows(&root).iter().map(|row| row.style.background).collect();

    assert_eq!(
        backgrounds,
        [
            Some(Color::rgb(0xFF, 0xFF, 0xFF)),
            Some(Color::rgb(0xCC, 0xFF, 0xCC)),
            Some(Color::rgb(0xFF, 0xFF, 0xFF)),
        ]
    );
}

#[test]
fn test_cell_background_only_when_style_differs() {
    let mut table = table_of(&weights(3), &[]).show_grid_lines(false);
    let mut row = TableRow::new().style("good");
    row.add_cell(TableCell::text("inherits")).unwrap();
    row.add_cell(TableCell::text("same").style("Good")).unwrap();
    row.add_cell(TableCell::text("own").style("warning")).unwrap();
    table.add_row(row).unwrap();

    let host = HostConfig::default();
    let root = table.render(&host).unwrap();
    let cells = rendered_rows(&root)[0].content.children();

    assert_eq!(cells[0].style.background, None);
    assert_eq!(cells[1].style.background, None);
    assert_eq!(cells[2].style.background, Some(Color::rgb(0xFF, 0xE2, 0xB2)));
    assert_eq!(cells[0].padding, Edges::default());
    assert_eq!(cells[2].padding, Edges::all(host.spacing.small));
}
