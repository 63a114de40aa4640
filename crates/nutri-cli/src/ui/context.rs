//! Terminal detection for output decisions.

use std::io::IsTerminal;

use super::mode::{FormatArg, OutputMode};

/// What the current terminal and flags allow.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build from the global CLI flags and the process environment.
    ///
    /// Color needs a terminal on stdout and is suppressed by `--no-color`,
    /// `NO_COLOR`, or `TERM=dumb`.
    pub fn from_env(json: bool, format: Option<FormatArg>, no_color: bool, ascii: bool) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let dumb = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        let color_env_off = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: stdout_tty && !(no_color || color_env_off || dumb),
            unicode: !ascii,
            mode: OutputMode::resolve(json, format, stdout_tty, dumb),
        }
    }

    /// Whether a session should print an input prompt.
    pub fn wants_prompt(&self) -> bool {
        self.mode.is_pretty() && std::io::stdin().is_terminal()
    }
}
