use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use nutri_core::{MatchingMode, VERSION};

use crate::ui::FormatArg;

/// Nutri - track what you eat against a daily calorie goal
#[derive(Parser)]
#[command(name = "nutri")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "NUTRI_CONFIG")]
    pub config: Option<String>,

    /// Food matching mode (overrides config)
    #[arg(long, global = true, value_name = "MODE")]
    pub mode: Option<MatchingMode>,

    /// Daily calorie goal (overrides config)
    #[arg(long, global = true, value_name = "KCAL")]
    pub goal: Option<u32>,

    /// Calories for unmatched foods in lenient mode (overrides config)
    #[arg(long, global = true, value_name = "KCAL")]
    pub default_calories: Option<u32>,

    /// Ratio of the goal above which status is "high" (e.g. 1.2)
    #[arg(long, global = true, value_name = "RATIO")]
    pub overage_threshold: Option<f64>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Food to log, as NAME or NAME:QUANTITY (repeatable)
    #[arg(short, long = "entry", value_name = "FOOD")]
    pub entries: Vec<String>,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive tracking session (reads commands from stdin)
    Session,

    /// Log foods from arguments and print the day's summary
    Summary(SummaryArgs),

    /// List the food reference table
    Foods,

    /// Show or initialize configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
