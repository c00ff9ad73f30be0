//! Command execution

use crate::commands::{EvalArgs, PlotArgs, ReplArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_operations, render_points, render_state, StateReport};
use std::io::{BufRead, Write};
use tapcalc::core::Variables;
use tapcalc::keypad::KeypadSession;
use tapcalc::plot::{sample, PlotRange};
use tracing::{debug, info};

/// Line that ends a repl session
pub const REPL_QUIT: &str = "quit";

fn build_session(config: &CliConfig, vars: &[String]) -> CliResult<KeypadSession> {
    let variables = Variables::from_bindings(vars)?;
    debug!(bindings = variables.len(), "session");
    Ok(KeypadSession::with_brain(config.brain())
        .with_format(config.number_format())
        .with_variables(variables))
}

fn press_tokens(session: &mut KeypadSession, tokens: &[String]) -> CliResult<()> {
    for token in tokens {
        session.press_line(token)?;
    }
    Ok(())
}

/// Presses the tokens and renders the final state
pub fn run_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<String> {
    let mut session = build_session(config, &args.vars)?;
    press_tokens(&mut session, &args.tokens)?;
    info!(entries = session.brain().log().len(), "eval done");
    render_state(&StateReport::capture(&session), config)
}

/// Reads lines of tokens until EOF or `quit`, printing state after each
///
/// A line the keypad rejects is reported on stderr and the session goes on.
pub fn run_repl<R: BufRead, W: Write>(
    config: &CliConfig,
    args: &ReplArgs,
    input: R,
    mut output: W,
) -> CliResult<()> {
    let mut session = build_session(config, &args.vars)?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == REPL_QUIT {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if let Err(e) = session.press_line(line) {
            debug!(error = %e, line, "line rejected");
            eprintln!("Error: {e}");
            continue;
        }
        writeln!(output, "{}", render_state(&StateReport::capture(&session), config)?)?;
    }
    info!(entries = session.brain().log().len(), "repl done");
    Ok(())
}

/// Samples the keyed program over the requested range
pub fn run_plot(config: &CliConfig, args: &PlotArgs) -> CliResult<String> {
    if args.var_name.trim().is_empty() {
        return Err(CliError::invalid_argument("--var-name must not be empty"));
    }
    let mut session = build_session(config, &args.vars)?;
    press_tokens(&mut session, &args.tokens)?;
    let range = PlotRange::new(args.from, args.to, args.steps)?;
    let points = sample(
        session.brain(),
        &args.var_name,
        session.variables(),
        &range,
    );
    info!(points = points.len(), free = %args.var_name, "plot done");
    render_points(&points, config)
}

/// Lists the operation table
pub fn run_ops(config: &CliConfig) -> CliResult<String> {
    render_operations(config)
}
