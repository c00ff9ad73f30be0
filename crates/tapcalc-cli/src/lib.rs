//! tapcalc CLI library
//!
//! Drives a keypad session from command-line tokens or stdin lines and
//! renders what the calculator display would show.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, Commands, EvalArgs, FormatArg, PlotArgs, ReplArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_operations, render_points, render_state, StateReport};
pub use runner::{run_eval, run_ops, run_plot, run_repl, REPL_QUIT};
