//! JSON output formatting.

use nutri_core::{LoggedFoodEntry, ReferenceTable, Summary};

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &LoggedFoodEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "name": entry.display_name,
        "quantity": entry.quantity,
        "unit": entry.unit,
        "calories": entry.calories,
        "matched": entry.matched,
        "logged_at": entry.logged_at,
    })
}

/// Convert the log to a JSON array, preserving order.
pub fn entries_json(entries: &[LoggedFoodEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

/// Convert a summary to JSON for output.
pub fn summary_json(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "total": summary.total,
        "entry_count": summary.entry_count,
        "progress": summary.progress,
    })
}

/// Convert the reference table to a JSON array, in table order.
pub fn foods_json(reference: &ReferenceTable) -> Vec<serde_json::Value> {
    reference
        .iter()
        .map(|food| {
            serde_json::json!({
                "name": food.name,
                "calories_per_unit": food.calories_per_unit,
                "unit": food.unit,
            })
        })
        .collect()
}
