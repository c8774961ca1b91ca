//! hostsweep - find HTTP listeners on a local network.
//!
//! Probes addresses one at a time with a short HTTP GET and reports the ones
//! that answer with a 2xx status.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Probe(args) => commands::run_probe(args, cli.timeout, cli.port, cli.json).await,
        Commands::Sweep(args) => commands::run_sweep(args, cli.timeout, cli.port, cli.json).await,
    }
}
