// src/core/sanitize.rs
use serde_json::Value;

/// Read a loosely-typed JSON value as trimmed text.
/// Strings as-is, numbers/bools by their JSON text, everything else empty.
pub fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s!(s.trim()),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => s!(),
    }
}
