//! crm-seed CLI - convert CRM client CSV exports into SQL seed scripts

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::convert;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version print to stdout and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            // nothing useful to do if the terminal is gone
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = convert::execute(&cli.convert, &cli.global) {
        let code = match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => *code,
            None => {
                eprintln!("error: {:#}", err);
                1
            }
        };
        std::process::exit(code);
    }
}
