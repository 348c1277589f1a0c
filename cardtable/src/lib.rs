//! Table element for a declarative card renderer.
//!
//! A [`Table`] is read from and written back to the card JSON schema,
//! edited through an API that keeps every row and cell owned by a single
//! parent, and rendered into an [`Element`] tree that a host turns into
//! real UI.

pub mod config;
pub mod element;
pub mod error;
pub mod serialization;
pub mod table;
pub mod types;

pub use config::HostConfig;
pub use element::Element;
pub use error::{Rejected, TableError};
pub use serialization::{SerializationContext, ValidationEvent, ValidationEventKind, Version};
pub use table::{
    ColumnDefinition, ColumnWidth, HorizontalAlignment, Table, TableCell, TableRow,
    VerticalAlignment,
};
