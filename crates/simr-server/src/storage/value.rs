//! Conversion between plain JSON and Firestore's typed value encoding
//!
//! Firestore's REST API wraps every value in a single-key object naming its
//! type, e.g. `{"stringValue": "x"}` or `{"integerValue": "42"}`.

use serde_json::{json, Map, Number, Value};
use simr_core::{Result, SimrError};

pub fn encode(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => encode_number(n),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode).collect::<Vec<_>>() }
        }),
        Value::Object(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
    }
}

pub fn encode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), encode(value)))
        .collect()
}

// Integers travel as decimal strings; anything outside i64 becomes a double.
fn encode_number(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => json!({ "integerValue": i.to_string() }),
        None => json!({ "doubleValue": n.as_f64().unwrap_or(0.0) }),
    }
}

pub fn decode(value: &Value) -> Result<Value> {
    let (kind, inner) = value
        .as_object()
        .and_then(|object| object.iter().next())
        .ok_or_else(|| SimrError::Decode(format!("not a typed value: {}", value)))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| malformed(kind, inner)),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| malformed(kind, inner)),
            Value::Number(n) if n.is_i64() => Ok(Value::Number(n.clone())),
            _ => Err(malformed(kind, inner)),
        },
        "doubleValue" => match inner {
            Value::Number(n) => Ok(Value::Number(n.clone())),
            // "NaN", "Infinity" and "-Infinity" have no JSON number form
            Value::String(_) => Ok(Value::Null),
            _ => Err(malformed(kind, inner)),
        },
        "stringValue" | "timestampValue" | "bytesValue" | "referenceValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| malformed(kind, inner)),
        "geoPointValue" => Ok(json!({
            "latitude": inner.get("latitude").cloned().unwrap_or(json!(0.0)),
            "longitude": inner.get("longitude").cloned().unwrap_or(json!(0.0)),
        })),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values,
                Some(_) => return Err(malformed(kind, inner)),
                None => return Ok(Value::Array(Vec::new())),
            };
            values
                .iter()
                .map(decode)
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            Some(_) => Err(malformed(kind, inner)),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(SimrError::Decode(format!("unsupported value type {}", other))),
    }
}

pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>> {
    fields
        .iter()
        .map(|(key, value)| -> Result<(String, Value)> { Ok((key.clone(), decode(value)?)) })
        .collect()
}

fn malformed(kind: &str, inner: &Value) -> SimrError {
    SimrError::Decode(format!("malformed {}: {}", kind, inner))
}
