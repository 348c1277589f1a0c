//! The table element: columns, rows and cells.
//!
//! A [`Table`] owns its [`ColumnDefinition`]s and an ordered collection of
//! [`TableRow`]s; each row owns an ordered collection of [`TableCell`]s.
//! Children carry an [`ElementId`] back-reference to their parent and can
//! belong to one container at a time.
//!
//! Rendering is driven from the table. It resolves column widths once,
//! then each row gives its cells a column index and type, and each cell
//! resolves its alignment through the row, column and table it sits in.

mod cell;
mod collection;
mod column;
mod content;
mod enums;
mod row;
mod styling;
#[allow(clippy::module_inception)]
mod table;
mod width;

pub use cell::TableCell;
pub use collection::{ElementBase, ElementId, ItemCollection, ItemMut, Parented};
pub use column::ColumnDefinition;
pub use content::{CardElement, TextBlock};
pub use enums::{CellType, FontWeight, HorizontalAlignment, Spacing, VerticalAlignment};
pub use row::TableRow;
pub use styling::{Stylable, DEFAULT_STYLE};
pub use table::{RowMut, Table};
pub use width::{compute_column_widths, ColumnWidth, InvalidColumnWidth};

use serde_json::Value;

use crate::serialization::schema::TYPE;
use crate::serialization::{PropertyBag, SerializationContext, ValidationEventKind};

/// Object of one collection entry, if it may appear in the collection.
///
/// Entries must be objects whose `type` is absent or `expected`; anything
/// else is reported and skipped.
pub(crate) fn collection_entry<'a>(
    entry: &'a Value,
    expected: &str,
    owner: &str,
    context: &mut SerializationContext,
) -> Option<&'a PropertyBag> {
    let Value::Object(bag) = entry else {
        context.log_parse_event(
            ValidationEventKind::InvalidPropertyValue,
            Some(owner),
            format!("expected a {expected} object, found {entry}"),
        );
        return None;
    };

    match bag.get(TYPE.name) {
        None => Some(bag),
        Some(Value::String(type_name)) if type_name == expected => Some(bag),
        Some(other) => {
            context.log_parse_event(
                ValidationEventKind::ElementTypeNotAllowed,
                Some(owner),
                format!("element type {other} is not allowed here, expected \"{expected}\""),
            );
            None
        }
    }
}
