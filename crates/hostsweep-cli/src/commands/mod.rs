//! Command implementations.

pub mod probe;
pub mod sweep;

pub use probe::run_probe;
pub use sweep::run_sweep;

use hostsweep_core::{ProbeConfig, Prober};

use crate::error::CliError;

/// Build a reqwest-backed prober from the global `--timeout` flag.
fn build_prober(timeout_ms: u64) -> Result<Prober, CliError> {
    let config = ProbeConfig::from_millis(timeout_ms)?;
    Ok(Prober::new(config)?)
}
