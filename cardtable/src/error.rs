//! Error types

use crate::table::ElementId;

/// Errors raised by table operations and document parsing.
///
/// Recoverable schema problems (a bad column width, an unknown enum value)
/// are not errors; they become validation events on the
/// [`SerializationContext`](crate::serialization::SerializationContext).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The element is already owned by a container and must be detached first.
    #[error("element {element} already belongs to {parent}; remove it from its parent first")]
    AlreadyParented { element: ElementId, parent: ElementId },

    /// Indexed access past the end of a collection.
    #[error("index {index} out of range (count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// The document is not a table object.
    #[error("invalid table document: {0}")]
    InvalidDocument(String),

    /// The document text is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The host config could not be read.
    #[error("invalid host config: {0}")]
    HostConfig(#[source] serde_json::Error),
}

impl TableError {
    pub(crate) fn out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }
}

/// A failed `add`, carrying the item that was not added.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Rejected<T> {
    pub error: TableError,
    pub item: T,
}

impl<T> Rejected<T> {
    /// Take back the item, dropping the error.
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> From<Rejected<T>> for TableError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
