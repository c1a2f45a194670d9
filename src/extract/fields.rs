//! First-match-wins field lookup over raw records.
//!
//! Candidate paths are evaluated in order; the first one that resolves to
//! a usable value wins, otherwise the caller's default applies.

use serde_json::Value;

/// Follow one path of nested object keys.
fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// First candidate path resolving to a string.
pub fn first_str(record: &Value, candidates: &[&[&str]], default: &str) -> String {
    for path in candidates {
        if let Some(value) = lookup(record, path).and_then(Value::as_str) {
            return value.to_string();
        }
    }
    default.to_string()
}

/// First candidate path resolving to a renderable scalar.
///
/// Line numbers arrive as JSON numbers from most tools, quoted strings
/// from some; both render identically in the report.
pub fn first_display(record: &Value, candidates: &[&[&str]], default: &str) -> String {
    opt_display(record, candidates).unwrap_or_else(|| default.to_string())
}

/// Like [`first_display`], but absence omits the value instead of
/// substituting a default.
pub fn opt_display(record: &Value, candidates: &[&[&str]]) -> Option<String> {
    for path in candidates {
        match lookup(record, path) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}
