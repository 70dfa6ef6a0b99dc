// src/health/render.rs
use serde_json::Value;

const INDENT: &str = "  ";

/// Flatten a JSON value into indented `key: value` lines, one per leaf.
///
/// Object keys holding an object or array print `key:` and recurse one level
/// deeper. Array elements render at the current level with no key. Strings are
/// written without quotes.
pub fn render_payload(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    let pad = INDENT.repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match child {
                    Value::Object(_) | Value::Array(_) => {
                        out.push_str(&format!("{}{}:\n", pad, key));
                        write_value(out, child, indent + 1);
                    }
                    scalar => {
                        out.push_str(&format!("{}{}: {}\n", pad, key, scalar_text(scalar)));
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                write_value(out, item, indent);
            }
        }
        scalar => {
            out.push_str(&format!("{}{}\n", pad, scalar_text(scalar)));
        }
    }
}

// Non-string scalars keep their JSON spelling: `true`, `null`, `1.5`.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
