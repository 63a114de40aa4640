//! Nutri CLI - log foods against a daily calorie goal
//!
//! Thin command-line front end over `nutri-core`. Each invocation owns one
//! in-memory ledger; nothing is persisted between runs except the config.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use nutri_core::{NutriError, ReferenceTable};
use tracing_subscriber::EnvFilter;

use app::AppContext;
use cli::{Cli, Commands, ConfigAction};
use helpers::error_hint;
use ui::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_env("NUTRI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = nutri_core::VERSION, "nutri starting");

    let app = AppContext::new(&cli);
    let result = match &cli.command {
        Commands::Session => commands::handle_session(&app),
        Commands::Summary(args) => commands::handle_summary(&app, args),
        Commands::Foods => commands::handle_foods(&app),
        Commands::Config(args) => match args.action {
            ConfigAction::Show => commands::handle_config_show(&app),
            ConfigAction::Init { force } => commands::handle_config_init(&app, force),
        },
        Commands::Completions(args) => commands::handle_completions(args.shell),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let hint = err
                .downcast_ref::<NutriError>()
                .and_then(|e| error_hint(e, &ReferenceTable::builtin()));
            print_error(&app.ui_context(), &err.to_string(), hint.as_deref());
            ExitCode::FAILURE
        }
    }
}
