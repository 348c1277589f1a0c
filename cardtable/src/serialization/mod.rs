//! Schema-driven JSON reading and writing.
//!
//! Elements keep their properties in typed fields. Each property also has a
//! static [`PropertyDefinition`] (name, version, default) and the generic
//! `read_*`/`write_*` helpers in [`schema`] move values between those fields
//! and a JSON object, reporting problems to a [`SerializationContext`]
//! instead of failing.

mod context;
pub mod schema;
mod version;

pub use context::{SerializationContext, ValidationEvent, ValidationEventKind};
pub use schema::{PropertyBag, PropertyDefault, PropertyDefinition, SchemaEnum};
pub use version::Version;
