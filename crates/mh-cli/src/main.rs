//! migrate - scaffolds timestamped up/down SQL migration files

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod logging;
mod prompt;

use cli::Cli;
use commands::create;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match create::execute(&cli.create, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
