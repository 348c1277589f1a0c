use std::fmt;

use super::Version;

/// Category of a non-fatal problem found while reading a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationEventKind {
    /// A property had the wrong type or an unparseable value.
    InvalidPropertyValue,
    /// A collection entry declared a type the collection cannot hold.
    ElementTypeNotAllowed,
}

/// A warning recorded during parsing. Parsing always continues.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEvent {
    pub kind: ValidationEventKind,
    /// Schema name of the object being read, e.g. `ColumnDefinition`.
    pub source: Option<String>,
    pub message: String,
}

impl fmt::Display for ValidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{source}: {} ({:?})", self.message, self.kind),
            None => write!(f, "{} ({:?})", self.message, self.kind),
        }
    }
}

/// State shared across one parse or serialize call.
#[derive(Debug, Clone, Default)]
pub struct SerializationContext {
    target_version: Version,
    events: Vec<ValidationEvent>,
}

impl SerializationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that writes only properties available in `version`.
    pub fn targeting(version: Version) -> Self {
        Self {
            target_version: version,
            events: Vec::new(),
        }
    }

    pub fn target_version(&self) -> Version {
        self.target_version
    }

    pub fn log_parse_event(
        &mut self,
        kind: ValidationEventKind,
        source: Option<&str>,
        message: impl Into<String>,
    ) {
        let event = ValidationEvent {
            kind,
            source: source.map(str::to_owned),
            message: message.into(),
        };
        log::warn!("[parse] {event}");
        self.events.push(event);
    }

    pub fn events(&self) -> &[ValidationEvent] {
        &self.events
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn take_events(&mut self) -> Vec<ValidationEvent> {
        std::mem::take(&mut self.events)
    }
}
