//! Text and table output formatting.
//!
//! Each `print_*` function also covers JSON mode by emitting one compact
//! JSON document per call, so a session produces JSON lines.

use chrono_tz::Tz;
use nutri_core::{LoggedFoodEntry, ReferenceTable, Status, Summary};

use super::json::{entries_json, entry_json, foods_json, summary_json};
use crate::ui::format::{format_amount, format_percent, format_quantity, format_time, truncate};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, gauge, header, kv, print, receipt, table, Badge, Column};
use crate::ui::{OutputMode, UiContext};

const NAME_MAX: usize = 32;
const GAUGE_WIDTH: usize = 24;

fn print_json(value: &serde_json::Value) {
    println!("{}", value);
}

/// Render the confirmation for a newly logged entry.
pub fn entry_added_text(ctx: &UiContext, entry: &LoggedFoodEntry, tz: Option<Tz>) -> String {
    let quantity = format_quantity(entry.quantity, entry.unit);
    match ctx.mode {
        OutputMode::Pretty => {
            let title = badge(ctx, Badge::Ok, &format!("Added {}", entry.display_name));
            let context = format!(
                "ID: {}  \u{00B7}  {}  \u{00B7}  {} kcal  \u{00B7}  {}",
                entry.id.short(),
                quantity,
                entry.calories,
                format_time(&entry.logged_at, tz)
            );
            format!("{}\n{}", title, styled(&context, styles::dim(), ctx.color))
        }
        OutputMode::Plain | OutputMode::Json => receipt(
            ctx,
            "Added",
            &[
                ("entry_id", entry.id.to_string()),
                ("food", entry.display_name.clone()),
                ("quantity", format_amount(entry.quantity)),
                ("unit", entry.unit.to_string()),
                ("calories", entry.calories.to_string()),
            ],
        ),
    }
}

pub fn print_entry_added(ctx: &UiContext, entry: &LoggedFoodEntry, tz: Option<Tz>, quiet: bool) {
    if ctx.mode.is_json() {
        print_json(&serde_json::json!({ "status": "ok", "entry": entry_json(entry) }));
    } else if !quiet {
        println!("{}", entry_added_text(ctx, entry, tz));
    }
}

pub fn print_entry_removed(ctx: &UiContext, entry: &LoggedFoodEntry, quiet: bool) {
    if ctx.mode.is_json() {
        print_json(&serde_json::json!({ "status": "ok", "removed": entry.id }));
    } else if !quiet {
        let text = if ctx.mode.is_pretty() {
            badge(
                ctx,
                Badge::Ok,
                &format!("Removed {} ({})", entry.display_name, entry.id.short()),
            )
        } else {
            receipt(ctx, "Removed", &[("removed", entry.id.to_string())])
        };
        println!("{}", text);
    }
}

/// Render the food log in display order.
pub fn entry_list_text(ctx: &UiContext, entries: &[LoggedFoodEntry], tz: Option<Tz>) -> String {
    if entries.is_empty() {
        return if ctx.mode.is_pretty() {
            "No foods logged yet. Add some foods to get started!".to_string()
        } else {
            "entries=0".to_string()
        };
    }

    let columns = [
        Column::new("ID"),
        Column::new("Food"),
        Column::numeric("Quantity"),
        Column::numeric("Calories"),
        Column::new("Time"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                entry.id.short(),
                truncate(&entry.display_name, NAME_MAX),
                format_quantity(entry.quantity, entry.unit),
                entry.calories.to_string(),
                format_time(&entry.logged_at, tz),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

pub fn print_entry_list(ctx: &UiContext, entries: &[LoggedFoodEntry], tz: Option<Tz>) {
    if ctx.mode.is_json() {
        print_json(&serde_json::json!({ "entries": entries_json(entries) }));
    } else {
        print(ctx, &entry_list_text(ctx, entries, tz));
    }
}

/// Render totals and goal progress.
pub fn summary_text(ctx: &UiContext, summary: &Summary) -> String {
    let progress = &summary.progress;
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(header(
            ctx,
            "summary",
            Some(&format!("goal {}", progress.goal)),
        ));
        lines.push(kv(
            ctx,
            "Consumed",
            &format!("{} of {} kcal", progress.consumed, progress.goal),
        ));
        lines.push(format!(
            "{} {}",
            gauge(ctx, progress.percent, GAUGE_WIDTH),
            format_percent(progress.percent)
        ));
        lines.push(kv(ctx, "Remaining", &progress.remaining.to_string()));
        lines.push(kv(ctx, "Foods", &summary.entry_count.to_string()));
        let status_line = match (progress.status, progress.overage) {
            (Status::Exceeded | Status::High, Some(over)) => format!(
                "{}: you've exceeded your daily goal by {} calories",
                progress.status, over
            ),
            (status, Some(over)) => {
                format!("{}: {} calories over goal, within threshold", status, over)
            }
            (status, None) => status.to_string(),
        };
        lines.push(badge(ctx, Badge::for_status(progress.status), &status_line));
    } else {
        lines.push(kv(ctx, "total", &summary.total.to_string()));
        lines.push(kv(ctx, "goal", &progress.goal.to_string()));
        lines.push(kv(ctx, "remaining", &progress.remaining.to_string()));
        lines.push(kv(ctx, "percent", &format!("{:.1}", progress.percent)));
        lines.push(kv(ctx, "status", progress.status.as_str()));
        if let Some(over) = progress.overage {
            lines.push(kv(ctx, "overage", &over.to_string()));
        }
        lines.push(kv(ctx, "entries", &summary.entry_count.to_string()));
    }

    lines.join("\n")
}

pub fn print_summary(ctx: &UiContext, summary: &Summary, quiet: bool) {
    if ctx.mode.is_json() {
        print_json(&summary_json(summary));
    } else if quiet {
        println!("{}", summary.total);
    } else {
        println!("{}", summary_text(ctx, summary));
    }
}

/// Render the reference table.
pub fn foods_text(ctx: &UiContext, reference: &ReferenceTable) -> String {
    let columns = [
        Column::new("Food"),
        Column::numeric("Calories"),
        Column::new("Per"),
    ];
    let rows: Vec<Vec<String>> = reference
        .iter()
        .map(|food| {
            vec![
                food.name.clone(),
                format_amount(food.calories_per_unit),
                food.unit.to_string(),
            ]
        })
        .collect();

    if ctx.mode.is_pretty() {
        table(ctx, &columns, &rows)
    } else {
        // Names may contain spaces, so plain rows are tab-separated.
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn print_foods(ctx: &UiContext, reference: &ReferenceTable) {
    if ctx.mode.is_json() {
        print_json(&serde_json::json!({ "foods": foods_json(reference) }));
    } else {
        println!("{}", foods_text(ctx, reference));
    }
}
