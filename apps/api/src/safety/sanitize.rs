use serde_json::Value;

/// Strips angle brackets and surrounding whitespace so model input and output
/// can never smuggle markup into a rendered document.
pub fn sanitize_input(text: &str) -> String {
    text.replace(['<', '>'], "").trim().to_string()
}

/// Applies [`sanitize_input`] to every string inside a JSON value, in place.
pub fn sanitize_value(value: &mut Value) {
    match value {
        Value::String(s) => *s = sanitize_input(s),
        Value::Array(items) => items.iter_mut().for_each(sanitize_value),
        Value::Object(map) => map.values_mut().for_each(sanitize_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Remote-model keys must be non-empty and carry the `sk-` prefix.
pub fn validate_api_key(key: &str) -> bool {
    !key.is_empty() && key.starts_with("sk-")
}
