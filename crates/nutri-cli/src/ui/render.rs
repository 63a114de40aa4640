//! Rendering primitives shared by the output module.
//!
//! Everything returns a `String` except the `print*` helpers. Plain mode
//! produces `key=value` lines and space-joined rows.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// "Nutri · command (context)" in pretty mode, "nutri command" otherwise.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("nutri {}", command);
    }
    let title = styled("Nutri", styles::bold(), ctx.color);
    match context {
        Some(context) => format!("{} \u{00B7} {} ({})", title, command, context),
        None => format!("{} \u{00B7} {}", title, command),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

/// "Key: value" with a dim key in pretty mode, "key=value" otherwise.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// A dim "Hint:" line. Only pretty output shows hints outside of errors.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
}

/// Confirmation block after a change: a badge and indented pairs, or
/// `status=ok` followed by `key=value` lines.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed-width bar for a percentage in `[0, 100]`.
pub fn gauge(ctx: &UiContext, percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let (full, empty) = if ctx.unicode {
        ("\u{2588}", "\u{2591}")
    } else {
        ("#", "-")
    };
    format!(
        "[{}{}]",
        full.repeat(filled),
        empty.repeat(width.saturating_sub(filled))
    )
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// A right-aligned column.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Borderless table with a dim header row in pretty mode. Plain mode drops
/// the header and joins each row with spaces.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let header: Vec<Cell> = columns
        .iter()
        .map(|column| {
            let cell = Cell::new(column.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    for row in rows {
        table.add_row(row);
    }
    for (index, column) in columns.iter().enumerate() {
        if let Some(table_column) = table.column_mut(index) {
            table_column.set_padding((0, 2));
            if column.numeric {
                table_column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    table.to_string()
}

/// Print unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer line between pretty sections.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Badge plus "Hint:" line in pretty mode, `error=`/`hint=` lines otherwise.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(2);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        lines.extend(error_hint.map(|h| hint(ctx, h)));
    } else {
        lines.push(format!("error={}", message));
        lines.extend(error_hint.map(|h| format!("hint={}", h)));
    }
    lines.join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
