//! UI primitives for the Nutri CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles, status colors
//! - **Render**: Tables, headers, receipts, hints, gauges
//! - **Format**: String utilities (truncate, quantities, times)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{FormatArg, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, gauge, header, hint, kv, print, print_error, receipt, table, Column,
};
