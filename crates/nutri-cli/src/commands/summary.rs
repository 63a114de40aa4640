use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::helpers::parse_entry_spec;
use crate::output::{entries_json, print_entry_list, print_summary, summary_json};
use crate::ui::blank_line;

/// Log every `--entry` into a fresh ledger and print the result.
///
/// Stops at the first entry that fails to parse or resolve.
pub fn handle_summary(app: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let mut ledger = app.new_ledger()?;
    let ui_ctx = app.ui_context();
    let tz = app.timezone()?;

    for spec in &args.entries {
        let (name, quantity) = parse_entry_spec(spec)?;
        ledger.add_entry(&name, quantity)?;
    }
    let summary = ledger.summary();

    if ui_ctx.mode.is_json() {
        let output = serde_json::json!({
            "entries": entries_json(ledger.entries()),
            "summary": summary_json(&summary),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !app.quiet() && !ledger.is_empty() {
        print_entry_list(&ui_ctx, ledger.entries(), tz);
        blank_line(&ui_ctx);
    }
    print_summary(&ui_ctx, &summary, app.quiet());
    Ok(())
}
