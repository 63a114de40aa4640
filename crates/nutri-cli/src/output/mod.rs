//! Output formatting helpers for the CLI.
//!
//! This module renders ledger entries, summaries, and the reference table
//! in JSON or text (plain/pretty) form.

mod json;
mod text;

pub use json::{entries_json, entry_json, foods_json, summary_json};
pub use text::{
    print_entry_added, print_entry_list, print_entry_removed, print_foods, print_summary,
};
