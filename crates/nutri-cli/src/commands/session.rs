//! Interactive tracking session.
//!
//! Reads one command per line from stdin until `quit` or end of input. The
//! ledger lives for the length of the session; failed commands are reported
//! and the loop carries on.

use std::io::{self, BufRead, Write};

use chrono_tz::Tz;
use nutri_core::{Ledger, NutriError, ReferenceTable, QUICK_ADD};

use crate::app::AppContext;
use crate::helpers::{error_hint, split_name_and_quantity};
use crate::output::{
    print_entry_added, print_entry_list, print_entry_removed, print_foods, print_summary,
};
use crate::ui::render::error_message;
use crate::ui::{header, hint, print, UiContext};

const PROMPT: &str = "nutri> ";

const HELP: &str = "\
Commands:
  add <food> [quantity]   log a food (grams, ml, or pieces)
  quick [n|food]          log a quick-add food, or list them
  rm <id-prefix>          remove an entry by id prefix
  list                    show the food log
  summary                 show totals and goal progress
  foods                   show the reference table
  help                    show this help
  quit                    end the session";

/// One parsed line of session input.
#[derive(Debug, PartialEq)]
enum SessionCommand {
    Add {
        name: String,
        quantity: Option<f64>,
    },
    Quick(Option<String>),
    Remove(String),
    List,
    Summary,
    Foods,
    Help,
    Quit,
    Blank,
}

#[derive(Debug, PartialEq)]
enum SessionError {
    Ledger(NutriError),
    Usage(String),
}

impl From<NutriError> for SessionError {
    fn from(err: NutriError) -> Self {
        SessionError::Ledger(err)
    }
}

fn usage(message: impl Into<String>) -> SessionError {
    SessionError::Usage(message.into())
}

fn parse_command(line: &str) -> Result<SessionCommand, SessionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(SessionCommand::Blank);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(SessionError::Ledger(NutriError::EmptyName));
            }
            let (name, quantity) = split_name_and_quantity(rest);
            Ok(SessionCommand::Add { name, quantity })
        }
        "quick" => Ok(SessionCommand::Quick(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "rm" | "remove" => {
            if rest.is_empty() {
                return Err(usage("Usage: rm <id-prefix>"));
            }
            Ok(SessionCommand::Remove(rest.to_string()))
        }
        "list" | "ls" => Ok(SessionCommand::List),
        "summary" => Ok(SessionCommand::Summary),
        "foods" => Ok(SessionCommand::Foods),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => Err(usage(format!(
            "Unknown command \"{}\" (type `help` for commands)",
            other
        ))),
    }
}

/// Map a quick-add selection (1-based index or name) to its food name.
fn quick_food(selection: &str) -> Result<&'static str, SessionError> {
    if let Ok(index) = selection.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| QUICK_ADD.get(i))
            .copied()
            .ok_or_else(|| usage(format!("Pick a quick-add number from 1 to {}", QUICK_ADD.len())));
    }
    QUICK_ADD
        .iter()
        .find(|food| food.eq_ignore_ascii_case(selection))
        .copied()
        .ok_or_else(|| usage(format!("\"{}\" is not a quick-add food", selection)))
}

fn quick_list() -> String {
    QUICK_ADD
        .iter()
        .enumerate()
        .map(|(i, food)| format!("{}. {}", i + 1, food))
        .collect::<Vec<_>>()
        .join("\n")
}

struct Session<'a> {
    ledger: Ledger,
    ui: UiContext,
    tz: Option<Tz>,
    quiet: bool,
    reference: &'a ReferenceTable,
}

impl Session<'_> {
    /// Run one command. Returns `false` when the session should end.
    fn execute(&mut self, command: SessionCommand) -> Result<bool, SessionError> {
        match command {
            SessionCommand::Blank => {}
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Add { name, quantity } => {
                let entry = self.ledger.add_entry(&name, quantity)?;
                print_entry_added(&self.ui, &entry, self.tz, self.quiet);
            }
            SessionCommand::Quick(None) => {
                if self.ui.mode.is_json() {
                    println!("{}", serde_json::json!({ "quick_add": QUICK_ADD }));
                } else {
                    print(&self.ui, &quick_list());
                }
            }
            SessionCommand::Quick(Some(selection)) => {
                let food = quick_food(&selection)?;
                let entry = self.ledger.add_entry(food, None)?;
                print_entry_added(&self.ui, &entry, self.tz, self.quiet);
            }
            SessionCommand::Remove(prefix) => {
                let id = {
                    let matches = self.ledger.matching_prefix(&prefix);
                    match matches.as_slice() {
                        [] => return Err(usage(format!("No entry matches \"{}\"", prefix))),
                        [entry] => entry.id,
                        _ => {
                            return Err(usage(format!(
                                "\"{}\" matches {} entries; use a longer prefix",
                                prefix,
                                matches.len()
                            )))
                        }
                    }
                };
                if let Some(entry) = self.ledger.get(&id).cloned() {
                    self.ledger.remove_entry(&id);
                    print_entry_removed(&self.ui, &entry, self.quiet);
                }
            }
            SessionCommand::List => print_entry_list(&self.ui, self.ledger.entries(), self.tz),
            SessionCommand::Summary => print_summary(&self.ui, &self.ledger.summary(), self.quiet),
            SessionCommand::Foods => print_foods(&self.ui, self.reference),
            SessionCommand::Help => print(&self.ui, HELP),
        }
        Ok(true)
    }

    fn report(&self, err: &SessionError) {
        let (message, hint_text) = match err {
            SessionError::Ledger(e) => (e.to_string(), error_hint(e, self.reference)),
            SessionError::Usage(message) => (message.clone(), None),
        };
        tracing::debug!(error = %message, "session command failed");

        if self.ui.mode.is_json() {
            println!(
                "{}",
                serde_json::json!({ "status": "error", "error": message, "hint": hint_text })
            );
        } else {
            eprintln!(
                "{}",
                error_message(&self.ui, &message, hint_text.as_deref())
            );
        }
    }
}

pub fn handle_session(app: &AppContext) -> anyhow::Result<()> {
    let ledger = app.new_ledger()?;
    let reference = ledger.reference().clone();
    let ui_ctx = app.ui_context();
    let prompt = ui_ctx.wants_prompt();

    if prompt && !app.quiet() {
        let goal = format!("goal {}", ledger.config().daily_goal);
        println!("{}", header(&ui_ctx, "session", Some(&goal)));
        println!(
            "{}",
            hint(
                &ui_ctx,
                &format!(
                    "type `help` for commands; quick add: {}",
                    QUICK_ADD.join(", ")
                )
            )
        );
    }

    let mut session = Session {
        ledger,
        ui: ui_ctx,
        tz: app.timezone()?,
        quiet: app.quiet(),
        reference: &reference,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_command(&line).and_then(|command| session.execute(command)) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => session.report(&err),
        }
    }

    tracing::debug!(entries = session.ledger.len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_command("add rice 150").unwrap(),
            SessionCommand::Add {
                name: "rice".to_string(),
                quantity: Some(150.0)
            }
        );
        assert_eq!(
            parse_command("ADD Chicken Biryani").unwrap(),
            SessionCommand::Add {
                name: "Chicken Biryani".to_string(),
                quantity: None
            }
        );
        assert_eq!(
            parse_command("add"),
            Err(SessionError::Ledger(NutriError::EmptyName))
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_command("   ").unwrap(), SessionCommand::Blank);
        assert_eq!(parse_command("list").unwrap(), SessionCommand::List);
        assert_eq!(parse_command("exit").unwrap(), SessionCommand::Quit);
        assert_eq!(
            parse_command("rm 1a2b").unwrap(),
            SessionCommand::Remove("1a2b".to_string())
        );
        assert_eq!(parse_command("quick").unwrap(), SessionCommand::Quick(None));
        assert!(matches!(parse_command("rm"), Err(SessionError::Usage(_))));
        assert!(matches!(parse_command("eat rice"), Err(SessionError::Usage(_))));
    }

    #[test]
    fn test_quick_food() {
        assert_eq!(quick_food("1").unwrap(), "Apple");
        assert_eq!(quick_food("yogurt").unwrap(), "Yogurt");
        assert!(quick_food("0").is_err());
        assert!(quick_food("6").is_err());
        assert!(quick_food("pizza").is_err());
    }

    #[test]
    fn test_quick_list_is_numbered() {
        let list = quick_list();
        assert!(list.starts_with("1. Apple\n2. Banana"));
        assert_eq!(list.lines().count(), QUICK_ADD.len());
    }
}
