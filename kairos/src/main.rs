//! `kairos` - command-line calculator for non-calendar time spans

use clap::Parser;

use kairos::cli::args::Cli;
use kairos::cli::commands;
use kairos::error::ExitCode;
use kairos::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
