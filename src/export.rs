//! CSV export of the mood-entry collection.

use crate::models::mood::MoodEntry;

const CSV_HEADER: &str = "id,timestamp,intensity,tags,note,source";

/// Render entries as CSV, one row per entry in collection order. Tags are
/// joined with `;`; fields containing commas, quotes, or newlines are quoted
/// per RFC 4180.
pub fn mood_entries_csv(entries: &[MoodEntry]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        let fields = [
            entry.id.to_string(),
            entry.timestamp.to_rfc3339(),
            entry.intensity.to_string(),
            entry.tags.join(";"),
            entry.note.clone().unwrap_or_default(),
            entry.source.clone(),
        ];

        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn csv_field(value: &str) -> String {
    let needs_quoting = value
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
