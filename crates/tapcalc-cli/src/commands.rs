//! CLI command definitions using clap

use crate::config::{CliConfig, OutputFormat, Verbosity};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tapcalc::keypad::MEMORY_VARIABLE;

/// tapcalc: keypad calculator with undo, memory and a running description
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Fraction digits shown on the display
    #[arg(long, default_value_t = 6, global = true)]
    pub digits: usize,

    /// Seed for `rand`, for repeatable runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the runtime configuration from the global flags
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_format(self.format.into())
            .with_max_fraction_digits(self.digits)
            .with_seed(self.seed)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the final state
    Eval(EvalArgs),

    /// Read keys from stdin, one line at a time
    Repl(ReplArgs),

    /// Sample the entered keys as a function of a variable
    Plot(PlotArgs),

    /// List recognized operator symbols
    Ops,
}

/// Arguments for the eval command
#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Variable binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Keys: numbers, operator symbols, M, →M, undo
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the repl command
#[derive(Args, Debug, Clone, Default)]
pub struct ReplArgs {
    /// Variable binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,
}

/// Arguments for the plot command
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Variable binding for names other than the free one, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Free variable
    #[arg(long, default_value = MEMORY_VARIABLE)]
    pub var_name: String,

    /// First x
    #[arg(long, allow_negative_numbers = true, default_value_t = -5.0)]
    pub from: f64,

    /// Last x
    #[arg(long, allow_negative_numbers = true, default_value_t = 5.0)]
    pub to: f64,

    /// Number of samples
    #[arg(long, default_value_t = 11)]
    pub steps: usize,

    /// Keys describing f(x)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
