use cardtable::table::{
    CardElement, ColumnDefinition, ColumnWidth, HorizontalAlignment, Table, TableCell, TableRow,
    TextBlock, VerticalAlignment,
};
use cardtable::serialization::PropertyDefinition;
use cardtable::{SerializationContext, TableError, ValidationEventKind, Version};
use serde_json::{json, Value};

fn parse(value: Value) -> (Table, SerializationContext) {
    let mut context = SerializationContext::new();
    let table = Table::parse(&value, &mut context).unwrap();
    (table, context)
}

fn event_kinds(context: &SerializationContext) -> Vec<ValidationEventKind> {
    context.events().iter().map(|event| event.kind).collect()
}

fn cell(text: &str) -> Value {
    json!({
        "type": "TableCell",
        "items": [{ "type": "TextBlock", "text": text }]
    })
}

fn sample_document() -> Value {
    json!({
        "type": "Table",
        "id": "inventory",
        "style": "accent",
        "columns": [
            { "width": "50px", "horizontalCellContentAlignment": "Right" },
            { "width": 2, "verticalCellContentAlignment": "Bottom" }
        ],
        "rows": [
            {
                "type": "TableRow",
                "style": "emphasis",
                "cells": [cell("Item"), cell("Count")]
            },
            {
                "type": "TableRow",
                "id": "row-2",
                "horizontalCellContentAlignment": "Center",
                "cells": [
                    {
                        "type": "TableCell",
                        "id": "apples",
                        "style": "good",
                        "horizontalAlignment": "Left",
                        "verticalContentAlignment": "Center",
                        "items": [
                            {
                                "type": "TextBlock",
                                "text": "Apples",
                                "weight": "Bolder",
                                "wrap": true
                            }
                        ]
                    },
                    cell("3")
                ]
            },
            {
                "type": "TableRow",
                "verticalCellContentAlignment": "Top",
                "cells": [
                    cell("Pears"),
                    {
                        "type": "TableCell",
                        "items": [
                            { "type": "Image", "url": "https://example.com/pear.png" },
                            { "type": "TextBlock", "text": "hidden", "isVisible": false }
                        ]
                    }
                ]
            }
        ],
        "firstRowAsHeaders": false,
        "showGridLines": false,
        "gridStyle": "attention",
        "horizontalCellContentAlignment": "Center",
        "verticalCellContentAlignment": "Bottom"
    })
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_round_trip_preserves_document() {
    let source = sample_document();
    let (table, context) = parse(source.clone());

    assert!(!context.has_events(), "unexpected events: {:?}", context.events());
    assert_eq!(table.to_json(&context), source);
}

#[test]
fn test_parsed_fields() {
    let (table, _) = parse(sample_document());

    assert_eq!(table.id.as_deref(), Some("inventory"));
    assert!(!table.first_row_as_headers);
    assert!(!table.show_grid_lines);
    assert_eq!(table.grid_style.as_deref(), Some("attention"));
    assert_eq!(table.horizontal_cell_content_alignment, Some(HorizontalAlignment::Center));
    assert_eq!(table.vertical_cell_content_alignment, Some(VerticalAlignment::Bottom));

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.column_at(0).unwrap().width, ColumnWidth::Pixel(50.0));
    assert_eq!(table.column_at(1).unwrap().width, ColumnWidth::Weight(2.0));

    assert_eq!(table.row_count(), 3);
    let row = table.row_at(1).unwrap();
    assert_eq!(row.id.as_deref(), Some("row-2"));
    let apples = row.cell_at(0).unwrap();
    assert_eq!(apples.id.as_deref(), Some("apples"));
    assert_eq!(apples.style.as_deref(), Some("good"));
    assert_eq!(apples.vertical_content_alignment, Some(VerticalAlignment::Center));

    let items = &table.row_at(2).unwrap().cell_at(1).unwrap().items;
    assert!(matches!(items[0], CardElement::Unknown(_)));
    assert!(!items[1].is_visible());
}

#[test]
fn test_parsed_rows_are_owned_by_table() {
    use cardtable::table::Parented;

    let (table, _) = parse(sample_document());
    for row in table.rows() {
        assert_eq!(row.parent(), Some(table.element_id()));
        for cell in row.cells() {
            assert_eq!(cell.parent(), Some(row.element_id()));
        }
    }
}

#[test]
fn test_string_round_trip() {
    let mut table = Table::new().id("t");
    table.add_column(ColumnDefinition::weight(1.5));
    table.add_row(TableRow::from_texts(["a"])).unwrap();

    let context = SerializationContext::new();
    let text = table.to_json_string(&context).unwrap();

    let mut reread_context = SerializationContext::new();
    let reread = Table::from_json(&text, &mut reread_context).unwrap();
    assert_eq!(reread.to_json(&context), table.to_json(&context));
    assert_eq!(reread.column_at(0).unwrap().width, ColumnWidth::Weight(1.5));
}

#[test]
fn test_computed_widths_are_not_written() {
    let (mut table, context) = parse(sample_document());
    let before = table.to_json(&context);

    table.render(&Default::default());
    assert!(table.column_at(1).unwrap().computed_width().is_some());
    assert_eq!(table.to_json(&context), before);
}

// ============================================================================
// Defaults and Omission Tests
// ============================================================================

#[test]
fn test_default_booleans_and_empty_arrays_are_omitted() {
    let table = Table::new();
    let written = table.to_json(&SerializationContext::new());

    assert_eq!(written, json!({ "type": "Table" }));
}

#[test]
fn test_missing_collections_read_as_empty() {
    let (table, context) = parse(json!({ "type": "Table" }));

    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column_count(), 0);
    assert!(table.first_row_as_headers);
    assert!(table.show_grid_lines);
    assert!(!context.has_events());
}

#[test]
fn test_missing_type_is_accepted() {
    let (table, context) = parse(json!({ "rows": [{ "cells": [{}] }] }));

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.row_at(0).unwrap().cell_count(), 1);
    assert!(!context.has_events());
}

#[test]
fn test_rows_backfilled_after_parse() {
    let (table, _) = parse(json!({
        "type": "Table",
        "columns": [{ "width": 1 }, { "width": 1 }, { "width": 1 }],
        "rows": [{ "type": "TableRow", "cells": [cell("only")] }]
    }));

    assert_eq!(table.row_at(0).unwrap().cell_count(), 3);
}

#[test]
fn test_missing_width_defaults_silently() {
    let (table, context) = parse(json!({ "type": "Table", "columns": [{}] }));

    assert_eq!(table.column_at(0).unwrap().width, ColumnWidth::Weight(1.0));
    assert!(!context.has_events());
}

#[test]
fn test_enums_read_case_insensitively() {
    let (table, context) = parse(json!({
        "type": "Table",
        "horizontalCellContentAlignment": "right",
        "verticalCellContentAlignment": "CENTER"
    }));

    assert!(!context.has_events());
    assert_eq!(table.horizontal_cell_content_alignment, Some(HorizontalAlignment::Right));

    let written = table.to_json(&context);
    assert_eq!(written["horizontalCellContentAlignment"], "Right");
    assert_eq!(written["verticalCellContentAlignment"], "Center");
}

#[test]
fn test_star_weight_accepted() {
    let (table, context) = parse(json!({ "type": "Table", "columns": [{ "width": "3*" }] }));

    assert_eq!(table.column_at(0).unwrap().width, ColumnWidth::Weight(3.0));
    assert!(!context.has_events());
}

// ============================================================================
// Validation Event Tests
// ============================================================================

#[test]
fn test_bad_widths_warn_and_default() {
    let (table, context) = parse(json!({
        "type": "Table",
        "columns": [
            { "width": "wide" },
            { "width": -3 },
            { "width": "0px" },
            { "width": true }
        ]
    }));

    assert_eq!(event_kinds(&context), vec![ValidationEventKind::InvalidPropertyValue; 4]);
    assert!(context
        .events()
        .iter()
        .all(|event| event.source.as_deref() == Some("ColumnDefinition")));
    assert!(table.columns().iter().all(|column| column.width == ColumnWidth::Weight(1.0)));
}

#[test]
fn test_bad_enum_reads_as_unset() {
    let (table, context) = parse(json!({
        "type": "Table",
        "horizontalCellContentAlignment": "Sideways",
        "verticalCellContentAlignment": 7
    }));

    assert_eq!(event_kinds(&context).len(), 2);
    assert_eq!(table.horizontal_cell_content_alignment, None);
    assert_eq!(table.vertical_cell_content_alignment, None);
}

#[test]
fn test_bad_boolean_reads_as_default() {
    let (table, context) = parse(json!({ "type": "Table", "showGridLines": "no" }));

    assert!(table.show_grid_lines);
    assert_eq!(event_kinds(&context), [ValidationEventKind::InvalidPropertyValue]);
}

#[test]
fn test_wrong_entry_types_are_skipped() {
    let (table, context) = parse(json!({
        "type": "Table",
        "columns": ["wide"],
        "rows": [
            { "type": "Container" },
            42,
            { "type": "TableRow", "cells": [{ "type": "TableRow" }, cell("kept")] }
        ]
    }));

    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.row_at(0).unwrap().cell_count(), 1);
    assert_eq!(
        event_kinds(&context),
        [
            ValidationEventKind::InvalidPropertyValue,
            ValidationEventKind::ElementTypeNotAllowed,
            ValidationEventKind::InvalidPropertyValue,
            ValidationEventKind::ElementTypeNotAllowed,
        ]
    );
}

#[test]
fn test_take_events_drains() {
    let (_, mut context) = parse(json!({ "type": "Table", "showGridLines": 1 }));

    assert_eq!(context.take_events().len(), 1);
    assert!(!context.has_events());
}

// ============================================================================
// Document Error Tests
// ============================================================================

#[test]
fn test_wrong_root_type_is_an_error() {
    let mut context = SerializationContext::new();
    let err = Table::parse(&json!({ "type": "TextBlock" }), &mut context).unwrap_err();
    assert!(matches!(err, TableError::InvalidDocument(_)));

    let err = Table::parse(&json!([1, 2]), &mut context).unwrap_err();
    assert!(matches!(err, TableError::InvalidDocument(_)));
}

#[test]
fn test_malformed_json_is_an_error() {
    let mut context = SerializationContext::new();
    let err = Table::from_json("{ \"type\": ", &mut context).unwrap_err();
    assert!(matches!(err, TableError::Json(_)));
}

// ============================================================================
// Version Targeting Tests
// ============================================================================

#[test]
fn test_older_target_omits_newer_properties() {
    let (table, _) = parse(sample_document());
    let written = table.to_json(&SerializationContext::targeting(Version::V1_0));

    // Only the cell's verticalContentAlignment is newer than 1.0.
    let mut expected = sample_document();
    expected["rows"][1]["cells"][0]
        .as_object_mut()
        .unwrap()
        .remove("verticalContentAlignment");
    assert_eq!(written, expected);
}

#[test]
fn test_table_properties_are_written_for_oldest_version() {
    let mut table = Table::new().first_row_as_headers(false).grid_style("accent");
    table.add_column(ColumnDefinition::pixel(40.0));
    table.add_row(TableRow::from_texts(["a"])).unwrap();

    let written = table.to_json(&SerializationContext::targeting(Version::V1_0));
    assert_eq!(written["firstRowAsHeaders"], false);
    assert_eq!(written["gridStyle"], "accent");
    assert_eq!(written["columns"][0]["width"], "40px");
    assert_eq!(written["rows"][0]["cells"][0]["items"][0]["text"], "a");
}

fn assert_keys_in_schema(value: &Value, schema: &[PropertyDefinition]) {
    for key in value.as_object().unwrap().keys() {
        assert!(
            schema.iter().any(|prop| prop.name == key.as_str()),
            "\"{key}\" is written but not in the schema"
        );
    }
}

#[test]
fn test_every_written_property_is_in_its_schema() {
    let (table, context) = parse(sample_document());
    let written = table.to_json(&context);

    assert_keys_in_schema(&written, Table::SCHEMA);
    for column in written["columns"].as_array().unwrap() {
        assert_keys_in_schema(column, ColumnDefinition::SCHEMA);
    }
    for row in written["rows"].as_array().unwrap() {
        assert_keys_in_schema(row, TableRow::SCHEMA);
        for cell in row["cells"].as_array().unwrap() {
            assert_keys_in_schema(cell, TableCell::SCHEMA);
            for item in cell["items"].as_array().unwrap() {
                if item["type"] == TextBlock::TYPE_NAME {
                    assert_keys_in_schema(item, TextBlock::SCHEMA);
                }
            }
        }
    }
}

#[test]
fn test_version_parse() {
    assert_eq!(Version::parse("1.5"), Some(Version::V1_5));
    assert_eq!(Version::parse("1.1"), Some(Version::V1_1));
    assert_eq!(Version::parse("one"), None);
    assert_eq!(Version::default(), Version::LATEST);
}
