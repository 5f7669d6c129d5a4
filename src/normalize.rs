//! Result normalization: argument coercion behind the uniform envelope.

use crate::adapter;
use crate::error::Error;
use crate::schema::{FieldKind, SchemaDefinition};
use serde_json::{Map, Value};

/// Substituted when the backend's confidence cannot be read as a number.
/// Surfaced via a warn-level log, not the error envelope.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Validate and coerce raw tool-call arguments into their final form.
///
/// Applies the adapter's validation contract, checks the classification type
/// against its allowed value set, and coerces `confidence` to a float in
/// `[0.0, 1.0]`.
pub fn normalize_arguments(
    schema: &SchemaDefinition,
    raw: &Value,
) -> crate::Result<Map<String, Value>> {
    let mut args = adapter::validate_arguments(schema, raw)?;
    check_classification_type(schema, &args)?;
    coerce_confidence(&mut args);
    Ok(args)
}

fn check_classification_type(
    schema: &SchemaDefinition,
    args: &Map<String, Value>,
) -> crate::Result<()> {
    let allowed = match schema.field("type").map(|f| &f.kind) {
        Some(FieldKind::Enum { values }) => *values,
        _ => return Ok(()),
    };

    match args.get("type").and_then(Value::as_str) {
        Some(value) if allowed.contains(&value) => Ok(()),
        Some(value) => Err(Error::InvalidFieldValue {
            field: "type",
            message: format!("'{}' is not one of {}", value, allowed.join(", ")),
        }),
        None => Err(Error::InvalidFieldValue {
            field: "type",
            message: "expected a string".to_string(),
        }),
    }
}

/// Coerce `confidence` to a float, falling back to [`FALLBACK_CONFIDENCE`] if
/// the backend produced something non-numeric. Out-of-range numerics are
/// clamped into `[0.0, 1.0]` so the success invariant always holds.
fn coerce_confidence(args: &mut Map<String, Value>) {
    let parsed = match args.get("confidence") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let value = match parsed.filter(|v| v.is_finite()) {
        Some(v) => v.clamp(0.0, 1.0),
        None => {
            let raw = args.get("confidence").cloned().unwrap_or(Value::Null);
            tracing::warn!(
                raw = %raw,
                fallback = FALLBACK_CONFIDENCE,
                "confidence not coercible to a number, substituting fallback"
            );
            FALLBACK_CONFIDENCE
        }
    };

    // value is finite by construction, so from_f64 cannot fail
    if let Some(number) = serde_json::Number::from_f64(value) {
        args.insert("confidence".to_string(), Value::Number(number));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    fn minimal() -> &'static SchemaDefinition {
        schema::resolve("minimal").unwrap()
    }

    #[test]
    fn test_numeric_confidence_passes_through() {
        let out =
            normalize_arguments(minimal(), &json!({"type": "prompt", "confidence": 0.92})).unwrap();
        assert_eq!(out["confidence"], json!(0.92));
    }

    #[test]
    fn test_numeric_string_confidence_parsed() {
        let out = normalize_arguments(minimal(), &json!({"type": "prompt", "confidence": "0.75"}))
            .unwrap();
        assert_eq!(out["confidence"], json!(0.75));
    }

    #[test]
    fn test_non_numeric_confidence_falls_back() {
        let out = normalize_arguments(
            minimal(),
            &json!({"type": "workflow", "confidence": "very sure"}),
        )
        .unwrap();
        assert_eq!(out["confidence"], json!(FALLBACK_CONFIDENCE));
    }

    #[test]
    fn test_boolean_confidence_falls_back() {
        let out =
            normalize_arguments(minimal(), &json!({"type": "prompt", "confidence": true})).unwrap();
        assert_eq!(out["confidence"], json!(FALLBACK_CONFIDENCE));
    }

    #[test]
    fn test_out_of_range_confidence_clamped() {
        let out =
            normalize_arguments(minimal(), &json!({"type": "prompt", "confidence": 1.7})).unwrap();
        assert_eq!(out["confidence"], json!(1.0));

        let out =
            normalize_arguments(minimal(), &json!({"type": "prompt", "confidence": -0.3})).unwrap();
        assert_eq!(out["confidence"], json!(0.0));
    }

    #[test]
    fn test_unknown_classification_type_rejected() {
        let err = normalize_arguments(minimal(), &json!({"type": "banana", "confidence": 0.9}))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFieldValue { field: "type", .. }));
    }

    #[test]
    fn test_non_string_classification_type_rejected() {
        let err =
            normalize_arguments(minimal(), &json!({"type": 3, "confidence": 0.9})).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldValue { field: "type", .. }));
    }
}
