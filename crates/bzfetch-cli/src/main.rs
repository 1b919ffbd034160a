use bzfetch_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.log_file {
        if let Err(err) = logging::init_file() {
            logging::init_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
    } else {
        logging::init_stderr();
    }

    if let Err(err) = cli.command.run() {
        eprintln!("bzfetch error: {:#}", err);
        std::process::exit(1);
    }
}
