use nutri_core::QUICK_ADD;

use crate::app::AppContext;
use crate::output::print_foods;
use crate::ui::{blank_line, hint, print};

pub fn handle_foods(app: &AppContext) -> anyhow::Result<()> {
    let ledger = app.new_ledger()?;
    let ui_ctx = app.ui_context();

    print_foods(&ui_ctx, ledger.reference());
    if ui_ctx.mode.is_pretty() && !app.quiet() {
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &hint(&ui_ctx, &format!("Quick add: {}", QUICK_ADD.join(", "))),
        );
    }
    Ok(())
}
