//! One-shot JSON export of a statistics table.
//!
//! The rows serialize to a single JSON object mapping row description to
//! row value, in display order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde_json::{Map, Value};

use crate::walk::stats::StatRow;

/// Serialize statistics rows to a JSON object string.
pub fn stats_to_json(rows: &[StatRow]) -> String {
    let mut object = Map::new();
    for row in rows {
        object.insert(row.description.clone(), Value::String(row.value.clone()));
    }
    Value::Object(object).to_string()
}

/// Write the statistics rows as JSON to `path`.
pub fn write_json(rows: &[StatRow], path: &Path) -> Result<()> {
    fs::write(path, stats_to_json(rows))
        .with_context(|| format!("cannot write stats file {}", path.display()))
}

/// Timestamped default export file name, e.g. `stats-20260825-143000.json`.
pub fn default_file_name() -> String {
    format!("stats-{}.json", Local::now().format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(description: &str, value: &str) -> StatRow {
        StatRow {
            description: description.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn serializes_rows_in_display_order() {
        let rows = vec![
            row("Time Delta", "10 seconds"),
            row("Interface Speed", "1,000,000"),
            row("Inbound Octet Delta", "1,000"),
        ];
        let json = stats_to_json(&rows);
        assert_eq!(
            json,
            "{\"Time Delta\":\"10 seconds\",\"Interface Speed\":\"1,000,000\",\
             \"Inbound Octet Delta\":\"1,000\"}"
        );
    }

    #[test]
    fn empty_stats_serialize_to_empty_object() {
        assert_eq!(stats_to_json(&[]), "{}");
    }

    #[test]
    fn default_name_is_json() {
        let name = default_file_name();
        assert!(name.starts_with("stats-"));
        assert!(name.ends_with(".json"));
    }
}
