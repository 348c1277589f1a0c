use serde_json::{Map, Value};

use super::{SerializationContext, ValidationEventKind, Version};

/// JSON object an element is read from or written to.
pub type PropertyBag = Map<String, Value>;

/// Enum whose values are written by name in documents.
///
/// Names are matched case-insensitively on read and written exactly as
/// listed in `VARIANTS`.
pub trait SchemaEnum: Sized + Copy + PartialEq + 'static {
    const VARIANTS: &'static [(&'static str, Self)];

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, v)| *v == self)
            .map(|(n, _)| *n)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyDefault {
    /// Absent unless set.
    None,
    Bool(bool),
}

/// Static description of one document property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub since: Version,
    pub default: PropertyDefault,
}

impl PropertyDefinition {
    pub const fn new(name: &'static str, since: Version) -> Self {
        Self {
            name,
            since,
            default: PropertyDefault::None,
        }
    }

    pub const fn bool(name: &'static str, since: Version, default: bool) -> Self {
        Self {
            name,
            since,
            default: PropertyDefault::Bool(default),
        }
    }

    pub fn default_bool(&self) -> bool {
        match self.default {
            PropertyDefault::Bool(value) => value,
            PropertyDefault::None => false,
        }
    }

    pub fn is_supported(&self, context: &SerializationContext) -> bool {
        self.since <= context.target_version()
    }
}

// Properties shared by several element types.
pub const TYPE: PropertyDefinition = PropertyDefinition::new("type", Version::V1_0);
pub const ID: PropertyDefinition = PropertyDefinition::new("id", Version::V1_0);
pub const STYLE: PropertyDefinition = PropertyDefinition::new("style", Version::V1_0);
pub const HORIZONTAL_CELL_CONTENT_ALIGNMENT: PropertyDefinition =
    PropertyDefinition::new("horizontalCellContentAlignment", Version::V1_0);
pub const VERTICAL_CELL_CONTENT_ALIGNMENT: PropertyDefinition =
    PropertyDefinition::new("verticalCellContentAlignment", Version::V1_0);

// =============================================================================
// Reading
// =============================================================================

fn invalid(
    context: &mut SerializationContext,
    owner: &str,
    prop: &PropertyDefinition,
    value: &Value,
) {
    context.log_parse_event(
        ValidationEventKind::InvalidPropertyValue,
        Some(owner),
        format!("invalid value for \"{}\": {value}", prop.name),
    );
}

pub fn read_bool(
    source: &PropertyBag,
    prop: &PropertyDefinition,
    owner: &str,
    context: &mut SerializationContext,
) -> bool {
    match source.get(prop.name) {
        None | Some(Value::Null) => prop.default_bool(),
        Some(Value::Bool(value)) => *value,
        Some(other) => {
            invalid(context, owner, prop, other);
            prop.default_bool()
        }
    }
}

pub fn read_string(
    source: &PropertyBag,
    prop: &PropertyDefinition,
    owner: &str,
    context: &mut SerializationContext,
) -> Option<String> {
    match source.get(prop.name) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            invalid(context, owner, prop, other);
            None
        }
    }
}

pub fn read_enum<T: SchemaEnum>(
    source: &PropertyBag,
    prop: &PropertyDefinition,
    owner: &str,
    context: &mut SerializationContext,
) -> Option<T> {
    let value = source.get(prop.name)?;
    let parsed = match value {
        Value::Null => return None,
        Value::String(name) => T::from_name(name),
        _ => None,
    };
    if parsed.is_none() {
        invalid(context, owner, prop, value);
    }
    parsed
}

/// Entries of an array property. Missing or non-array values read as empty.
pub fn read_array<'a>(source: &'a PropertyBag, name: &str) -> &'a [Value] {
    match source.get(name) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

// =============================================================================
// Writing
// =============================================================================

pub fn write_bool(target: &mut PropertyBag, prop: &PropertyDefinition, value: bool) {
    if value != prop.default_bool() {
        target.insert(prop.name.to_owned(), Value::Bool(value));
    }
}

pub fn write_string(target: &mut PropertyBag, prop: &PropertyDefinition, value: Option<&str>) {
    if let Some(value) = value {
        write_value(target, prop, Value::String(value.to_owned()));
    }
}

pub fn write_enum<T: SchemaEnum>(
    target: &mut PropertyBag,
    prop: &PropertyDefinition,
    value: Option<T>,
) {
    if let Some(value) = value {
        write_value(target, prop, Value::String(value.name().to_owned()));
    }
}

/// Arrays are omitted when empty.
pub fn write_array(target: &mut PropertyBag, prop: &PropertyDefinition, items: Vec<Value>) {
    if !items.is_empty() {
        write_value(target, prop, Value::Array(items));
    }
}

pub fn write_value(target: &mut PropertyBag, prop: &PropertyDefinition, value: Value) {
    target.insert(prop.name.to_owned(), value);
}

/// Keep only the properties of `target` that `schema` lists and the
/// context's target version supports.
///
/// Every element writes its properties first and then passes its own
/// `SCHEMA` here, so the schema table decides what reaches the document.
pub fn retain_supported(
    target: &mut PropertyBag,
    schema: &[PropertyDefinition],
    context: &SerializationContext,
) {
    target.retain(|key, _| {
        let prop = schema.iter().find(|prop| prop.name == key.as_str());
        debug_assert!(prop.is_some(), "\"{key}\" was written but is not in the schema");
        prop.is_some_and(|prop| prop.is_supported(context))
    });
}
