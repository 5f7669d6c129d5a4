//! Tool adapter: the structured-call extraction protocol.
//!
//! `declare` turns a schema's descriptor table into a single-purpose function
//! declaration the model is asked to invoke instead of writing prose.
//! `validate_arguments` applies the trust boundary to whatever comes back:
//! required fields must be present, unknown fields are dropped, and fields
//! the model omitted stay unset rather than defaulted.

use crate::error::Error;
use crate::schema::{FieldDescriptor, FieldKind, SchemaDefinition};
use crate::types::tool::{FunctionDefinition, ToolDefinition};
use serde_json::{json, Map, Value};

/// Name of the declared classification function.
pub const TOOL_NAME: &str = "classify_text";

const TOOL_DESCRIPTION: &str = "Classify the input text as prompt or workflow based on the analysis. \
prompt: single-step requests, questions, greetings, simple tasks. \
workflow: multi-step tasks requiring coordination, orchestration, or sequential operations.";

/// Fields whose absence fails the whole classification.
const HARD_REQUIRED: &[&str] = &["type", "confidence"];

/// Build the structured-call declaration for one schema.
///
/// Parameters mirror the schema's field descriptors one-to-one; descriptions
/// travel verbatim. The declaration is ephemeral: built per request, never
/// reused across requests with different schemas.
pub fn declare(schema: &SchemaDefinition) -> ToolDefinition {
    ToolDefinition {
        tool_type: "function".to_string(),
        function: FunctionDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: parameters_for(schema),
        },
    }
}

fn parameters_for(schema: &SchemaDefinition) -> Value {
    let mut properties = Map::new();
    for field in &schema.fields {
        properties.insert(field.name.to_string(), field_schema(field));
    }

    let required: Vec<&str> = schema.required_field_names();

    let mut map = Map::new();
    map.insert("type".into(), json!("object"));
    map.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        map.insert("required".into(), json!(required));
    }
    map.insert("additionalProperties".into(), json!(false));
    Value::Object(map)
}

fn field_schema(field: &FieldDescriptor) -> Value {
    let mut map = Map::new();
    match &field.kind {
        FieldKind::Enum { values } => {
            map.insert("type".into(), json!("string"));
            map.insert("enum".into(), json!(values));
        }
        FieldKind::Float { min, max } => {
            map.insert("type".into(), json!("number"));
            map.insert("minimum".into(), json!(min));
            map.insert("maximum".into(), json!(max));
        }
        FieldKind::Integer { min, max } => {
            map.insert("type".into(), json!("integer"));
            if let Some(min) = min {
                map.insert("minimum".into(), json!(min));
            }
            if let Some(max) = max {
                map.insert("maximum".into(), json!(max));
            }
        }
        FieldKind::String { min_len, max_len } => {
            map.insert("type".into(), json!("string"));
            if let Some(min_len) = min_len {
                map.insert("minLength".into(), json!(min_len));
            }
            if let Some(max_len) = max_len {
                map.insert("maxLength".into(), json!(max_len));
            }
        }
        FieldKind::StringList => {
            map.insert("type".into(), json!("array"));
            map.insert("items".into(), json!({"type": "string"}));
        }
        FieldKind::Bool => {
            map.insert("type".into(), json!("boolean"));
        }
    }
    map.insert("description".into(), json!(field.description));
    Value::Object(map)
}

/// Validate raw tool-call arguments against the schema that declared them.
///
/// Returns the argument map filtered to the schema's descriptor set. Fields
/// not present in the schema are silently dropped (forward-compatible against
/// model over-generation); fields the model omitted are left unset, and only a
/// missing `type` or `confidence` fails the call.
pub fn validate_arguments(
    schema: &SchemaDefinition,
    raw: &Value,
) -> crate::Result<Map<String, Value>> {
    let args = raw
        .as_object()
        .ok_or(Error::MissingRequiredField { field: "type" })?;

    for &field in HARD_REQUIRED {
        if !args.contains_key(field) {
            return Err(Error::MissingRequiredField { field });
        }
    }

    let mut out = Map::new();
    for field in &schema.fields {
        if let Some(value) = args.get(field.name) {
            out.insert(field.name.to_string(), value.clone());
        }
    }

    for key in args.keys() {
        if schema.field(key).is_none() {
            tracing::debug!(schema = schema.name, field = %key, "dropping field not in schema");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    #[test]
    fn test_declaration_mirrors_descriptors() {
        let s = schema::resolve("context_aware").unwrap();
        let tool = declare(s);
        assert_eq!(tool.tool_type, "function");
        assert_eq!(tool.function.name, TOOL_NAME);

        let params = &tool.function.parameters;
        assert_eq!(params["type"], json!("object"));
        for field in &s.fields {
            assert!(
                params["properties"].get(field.name).is_some(),
                "missing property {}",
                field.name
            );
        }
        let required = params["required"].as_array().unwrap();
        assert!(required.contains(&json!("type")));
        assert!(required.contains(&json!("confidence")));
    }

    #[test]
    fn test_enum_and_bounds_emitted() {
        let s = schema::resolve("detailed").unwrap();
        let params = declare(s).function.parameters;

        assert_eq!(
            params["properties"]["type"]["enum"],
            json!(["prompt", "workflow"])
        );
        assert_eq!(params["properties"]["confidence"]["minimum"], json!(0.0));
        assert_eq!(params["properties"]["confidence"]["maximum"], json!(1.0));
        assert_eq!(
            params["properties"]["complexity_score"]["minimum"],
            json!(1)
        );
        assert_eq!(
            params["properties"]["complexity_score"]["maximum"],
            json!(5)
        );
        assert_eq!(params["properties"]["reasoning"]["maxLength"], json!(200));
        assert_eq!(
            params["properties"]["indicators"]["items"],
            json!({"type": "string"})
        );
    }

    #[test]
    fn test_descriptions_travel_verbatim() {
        let s = schema::resolve("minimal").unwrap();
        let params = declare(s).function.parameters;
        assert_eq!(
            params["properties"]["confidence"]["description"],
            json!("Confidence score from 0.0 to 1.0")
        );
    }

    #[test]
    fn test_missing_type_fails() {
        let s = schema::resolve("minimal").unwrap();
        let err = validate_arguments(s, &json!({"confidence": 0.9})).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRequiredField { field: "type" }
        ));
    }

    #[test]
    fn test_missing_confidence_fails() {
        let s = schema::resolve("minimal").unwrap();
        let err = validate_arguments(s, &json!({"type": "prompt"})).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRequiredField {
                field: "confidence"
            }
        ));
    }

    #[test]
    fn test_non_object_arguments_fail() {
        let s = schema::resolve("minimal").unwrap();
        assert!(validate_arguments(s, &json!("prose answer")).is_err());
    }

    #[test]
    fn test_unknown_fields_silently_dropped() {
        let s = schema::resolve("minimal").unwrap();
        let out = validate_arguments(
            s,
            &json!({"type": "prompt", "confidence": 0.8, "mood": "sunny"}),
        )
        .unwrap();
        assert!(out.get("mood").is_none());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_omitted_schema_fields_left_unset() {
        let s = schema::resolve("standard").unwrap();
        let out = validate_arguments(s, &json!({"type": "prompt", "confidence": 0.8})).unwrap();
        assert!(out.get("reasoning").is_none());
    }
}
