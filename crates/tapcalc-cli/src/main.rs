//! tapcalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! tapcalc eval 2 × 5 =                    # 10 / "2 × 5 ="
//! tapcalc eval --var M=7 M + 1 =          # 8 / "M + 1 ="
//! tapcalc --format json eval 3 + 4 √      # pending state as JSON
//! tapcalc plot --from -2 --to 2 M x²      # sample f(M)
//! tapcalc repl                            # one line of keys at a time
//! ```

use clap::Parser;
use std::process::ExitCode;
use tapcalc_cli::{logging, run_eval, run_ops, run_plot, run_repl, Cli, CliResult, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(config.verbosity);

    match &cli.command {
        Commands::Eval(args) => println!("{}", run_eval(&config, args)?),
        Commands::Repl(args) => {
            let stdin = std::io::stdin();
            run_repl(&config, args, stdin.lock(), std::io::stdout())?;
        }
        Commands::Plot(args) => println!("{}", run_plot(&config, args)?),
        Commands::Ops => println!("{}", run_ops(&config)?),
    }
    Ok(())
}
