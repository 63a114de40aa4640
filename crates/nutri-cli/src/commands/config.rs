use crate::app::AppContext;
use crate::config::{write_config, NutriConfig};
use crate::ui::{kv, print, receipt};

/// Print the effective settings after flag overrides.
pub fn handle_config_show(app: &AppContext) -> anyhow::Result<()> {
    let path = app.config_path()?;
    let ledger_config = app.ledger_config()?;
    let timezone = app.file_config()?.ui.timezone.clone();
    let ui_ctx = app.ui_context();

    if ui_ctx.mode.is_json() {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "tracker": ledger_config,
            "ui": { "timezone": timezone },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let threshold = ledger_config
        .overage_threshold
        .map(|ratio| ratio.to_string())
        .unwrap_or_else(|| "none".to_string());
    let lines = [
        kv(&ui_ctx, "Path", &path.display().to_string()),
        kv(&ui_ctx, "Matching Mode", &ledger_config.matching_mode.to_string()),
        kv(&ui_ctx, "Daily Goal", &ledger_config.daily_goal.to_string()),
        kv(
            &ui_ctx,
            "Default Calories",
            &ledger_config.default_calories.to_string(),
        ),
        kv(&ui_ctx, "Overage Threshold", &threshold),
        kv(
            &ui_ctx,
            "Timezone",
            timezone.as_deref().unwrap_or("local"),
        ),
    ];
    print(&ui_ctx, &lines.join("\n"));
    Ok(())
}

/// Write a default config file, refusing to clobber one unless forced.
pub fn handle_config_init(app: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = app.config_path()?;
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    write_config(&path, &NutriConfig::default())?;
    tracing::debug!(path = %path.display(), "wrote default config");

    let ui_ctx = app.ui_context();
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({ "status": "ok", "path": path.display().to_string() })
        );
    } else if !app.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Config written",
                &[("path", path.display().to_string())],
            ),
        );
    }
    Ok(())
}
