//! Probe command implementation.

use hostsweep_core::{ProbeTarget, SweepMode, Sweeper};
use tracing::debug;

use super::build_prober;
use crate::cli::ProbeArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the probe command
pub async fn run_probe(args: ProbeArgs, timeout: u64, port: u16, json: bool) -> Result<(), CliError> {
    let targets = parse_targets(&args.addresses, port)?;
    let formatter = get_formatter(json);
    debug!(count = targets.len(), port, timeout, "probing addresses");

    let sweeper = Sweeper::new(build_prober(timeout)?, SweepMode::Exhaustive);
    let results = sweeper.run(targets).await;

    println!("{}", formatter.format_results(&results));
    Ok(())
}

fn parse_targets(addresses: &[String], port: u16) -> Result<Vec<ProbeTarget>, CliError> {
    addresses
        .iter()
        .map(|address| {
            let address = address.trim();
            if address.is_empty() {
                Err(CliError::InvalidArgument("address cannot be empty".to_string()))
            } else {
                Ok(ProbeTarget::with_port(address, port))
            }
        })
        .collect()
}
