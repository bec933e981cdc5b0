use serde_json::{Map, Value};

use crate::error::ActionError;

/// Builds the evaluation context from the two context inputs.
///
/// A non-blank `jsonContext` always wins and is passed through exactly
/// as parsed, without validating its shape. Otherwise the multiline
/// input is read as one `key:value` pair per line. With neither input
/// the context is an empty object, which is a valid evaluation.
pub fn build_context(
    json_context: Option<&str>,
    multiline_context: Option<&str>,
) -> Result<Value, ActionError> {
    if let Some(raw) = json_context.filter(|raw| !raw.trim().is_empty()) {
        return serde_json::from_str(raw).map_err(ActionError::InvalidJsonContext);
    }

    let mut context = Map::new();

    if let Some(lines) = multiline_context {
        for line in lines.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Split on the first `:` only, so values may contain colons.
            // A line without one becomes a key with an empty value.
            let (key, value) = match line.split_once(':') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };
            context.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    Ok(Value::Object(context))
}
