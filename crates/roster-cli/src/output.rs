//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One `field | value` line of a single-item table.
#[derive(Debug, PartialEq, Eq, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print a single item, as a field/value table or as JSON.
///
/// Nested objects are flattened into dotted field names (`server.port`).
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(item) {
            Ok(value) => println!("{}", Table::new(field_rows(&value))),
            Err(e) => print_error(&format!("Cannot render item: {e}")),
        },
        OutputFormat::Json => print_json(item),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", key), value);
}

fn print_json<T: Serialize + ?Sized>(item: &T) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Cannot render JSON: {e}")),
    }
}

fn field_rows(value: &Value) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    flatten("", value, &mut rows);
    rows
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<FieldRow>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, rows);
            }
        }
        Value::String(s) => rows.push(FieldRow {
            field: prefix.to_string(),
            value: s.clone(),
        }),
        other => rows.push(FieldRow {
            field: prefix.to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(field: &str, value: &str) -> FieldRow {
        FieldRow {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_nested_objects_flatten_to_dotted_fields() {
        let rows = field_rows(&json!({
            "server": { "host": "0.0.0.0", "port": 8080 },
            "logging": { "level": "info" }
        }));

        assert_eq!(rows.len(), 3);
        assert!(rows.contains(&row("logging.level", "info")));
        assert!(rows.contains(&row("server.host", "0.0.0.0")));
        assert!(rows.contains(&row("server.port", "8080")));
    }

    #[test]
    fn test_arrays_render_as_json() {
        let rows = field_rows(&json!({ "origins": ["*"] }));
        assert_eq!(rows, vec![row("origins", "[\"*\"]")]);
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let table = Table::new(field_rows(&json!({ "id": 1, "email": "test@gmail.com" })))
            .to_string();
        assert!(table.contains("Field"));
        assert!(table.contains("Value"));
        assert!(table.contains("test@gmail.com"));
    }
}
