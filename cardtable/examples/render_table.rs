use simplelog::{Config, LevelFilter, SimpleLogger};

use cardtable::element::Content;
use cardtable::{Element, HostConfig, SerializationContext, Table};

const DOCUMENT: &str = r#"{
    "type": "Table",
    "gridStyle": "accent",
    "columns": [{ "width": 2 }, { "width": "80px" }, { "width": 1 }],
    "rows": [
        {
            "type": "TableRow",
            "cells": [
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "Fruit" }] },
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "Qty" }] },
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "Note" }] }
            ]
        },
        {
            "type": "TableRow",
            "style": "good",
            "cells": [
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "Apples" }] },
                {
                    "type": "TableCell",
                    "horizontalAlignment": "right",
                    "items": [{ "type": "TextBlock", "text": "12" }]
                }
            ]
        },
        {
            "type": "TableRow",
            "cells": [
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "Pears" }] },
                { "type": "TableCell", "items": [{ "type": "TextBlock", "text": "3" }] },
                {
                    "type": "TableCell",
                    "items": [{ "type": "TextBlock", "text": "ripe", "wrap": true }]
                }
            ]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let mut context = SerializationContext::new();
    let mut table = Table::from_json(DOCUMENT, &mut context)?;
    for event in context.events() {
        println!("warning: {event}");
    }

    let host = HostConfig::default();
    match table.render(&host) {
        Some(root) => print_tree(&root, 0),
        None => println!("(nothing to render)"),
    }

    println!();
    println!("{}", table.to_json_string(&context)?);
    Ok(())
}

fn print_tree(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let role = element.get_attr("role").unwrap_or("-");

    let mut line = format!("{indent}{role} [{}]", element.id);
    if element.flex_grow > 0 || element.flex_shrink == 0 {
        line.push_str(&format!(
            " flex={} {} {:?}",
            element.flex_grow, element.flex_shrink, element.flex_basis
        ));
    }
    if let Some(background) = element.style.background {
        line.push_str(&format!(" bg={}", background.to_css()));
    }
    if let Some(border) = element.style.border.right {
        line.push_str(&format!(" border-right={}", border.to_css()));
    }
    if let Content::Text(text) = &element.content {
        line.push_str(&format!(" {text:?} {:?}", element.text_align));
    }
    println!("{line}");

    for child in element.content.children() {
        print_tree(child, depth + 1);
    }
}
