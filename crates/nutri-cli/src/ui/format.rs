//! String formatting utilities for UI rendering.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use nutri_core::Unit;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a quantity without a trailing ".0" for whole numbers.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let fixed = format!("{:.2}", value);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a logged quantity with its unit label (e.g., "150 g", "2 pc").
pub fn format_quantity(quantity: f64, unit: Unit) -> String {
    format!("{} {}", format_amount(quantity), unit.quantity_label())
}

/// Format a percentage with one decimal place.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Format the time an entry was logged, in `tz` or the local zone.
pub fn format_time(dt: &DateTime<Utc>, tz: Option<Tz>) -> String {
    match tz {
        Some(tz) => dt.with_timezone(&tz).format("%H:%M").to_string(),
        None => dt.with_timezone(&Local).format("%H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.0), "150");
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(2.25), "2.25");
        assert_eq!(format_amount(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(150.0, Unit::Per100g), "150 g");
        assert_eq!(format_quantity(250.0, Unit::Per100ml), "250 ml");
        assert_eq!(format_quantity(2.0, Unit::PerPiece), "2 pc");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.34), "12.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_format_time_in_zone() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(format_time(&dt, Some(chrono_tz::Asia::Kolkata)), "18:00");
        assert_eq!(format_time(&dt, Some(chrono_tz::UTC)), "12:30");
    }
}
