//! Schema registry: named output contracts for classification results.
//!
//! Every schema is an ordered table of [`FieldDescriptor`]s built once at
//! first use and shared for the process lifetime. The table is consumed by
//! both the prompt builder (schema-conditioned addendum) and the tool adapter
//! (parameter declaration + argument validation); nothing is derived from
//! runtime type introspection. The set of schemas is fixed at build time and
//! exposes no mutation surface, which makes concurrent read-only access safe.

mod builtin;

use crate::error::Error;
use once_cell::sync::Lazy;

/// Schema used when the caller does not name one.
pub const DEFAULT_SCHEMA: &str = "standard";

/// The binary decision every schema must produce.
pub const CLASSIFICATION_TYPES: &[&str] = &["prompt", "workflow"];

/// Conversation context labels used by the `context_aware` schema.
pub const CONVERSATION_CONTEXTS: &[&str] = &[
    "greeting",
    "question",
    "follow_up",
    "task_request",
    "multi_step",
];

/// Primitive kind of a schema field, with its constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// String restricted to a fixed value set.
    Enum { values: &'static [&'static str] },
    /// Floating value bounded to `[min, max]`.
    Float { min: f64, max: f64 },
    /// Integer with optional bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// String with optional length bounds.
    String {
        min_len: Option<u64>,
        max_len: Option<u64>,
    },
    /// List of strings.
    StringList,
    /// Boolean flag.
    Bool,
}

/// One field of an output contract.
///
/// The description is emitted verbatim into the generated tool declaration,
/// so it is written for the model, not for rustdoc.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

/// A named, immutable output contract.
///
/// `addendum` carries the schema-specific prompt instructions as data, so
/// adding a schema never touches the prompt builder's control flow.
#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub addendum: Option<&'static str>,
}

impl SchemaDefinition {
    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all required fields, in declaration order.
    pub fn required_field_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

static REGISTRY: Lazy<Vec<SchemaDefinition>> = Lazy::new(builtin::definitions);

/// Resolve a schema by name.
///
/// Fails with [`Error::UnknownSchema`]; the message enumerates every
/// registered name.
pub fn resolve(name: &str) -> crate::Result<&'static SchemaDefinition> {
    REGISTRY.iter().find(|s| s.name == name).ok_or_else(|| {
        Error::UnknownSchema {
            name: name.to_string(),
            available: schema_names().iter().map(|s| s.to_string()).collect(),
        }
    })
}

/// All registered schema names, in registration order (stable across calls).
pub fn schema_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|s| s.name).collect()
}
