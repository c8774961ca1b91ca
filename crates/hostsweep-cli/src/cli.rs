//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};

use hostsweep_core::DEFAULT_TIMEOUT_MS;

/// hostsweep - find HTTP listeners on a local network
#[derive(Parser, Debug)]
#[command(name = "hostsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Per-probe timeout in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS, env = "HOSTSWEEP_TIMEOUT")]
    pub timeout: u64,

    /// HTTP port to probe
    #[arg(long, global = true, default_value_t = 80, env = "HOSTSWEEP_PORT")]
    pub port: u16,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe individual addresses
    Probe(ProbeArgs),

    /// Sweep the last octet of one or more /24 prefixes
    Sweep(SweepArgs),
}

// ==================== Probe ====================

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Addresses to probe, in order
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

// ==================== Sweep ====================

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Prefixes such as 192.168.4 or 192.168.4.0/24
    #[arg(default_value = "192.168.4")]
    pub prefixes: Vec<String>,

    /// Sweep the common home and corporate prefixes instead
    #[arg(long, conflicts_with = "prefixes")]
    pub common: bool,

    /// First last-octet value to probe
    #[arg(long, default_value_t = 0)]
    pub start: u8,

    /// Last last-octet value to probe (inclusive)
    #[arg(long, default_value_t = 255)]
    pub end: u8,

    /// Probe every address instead of stopping at the first responder
    #[arg(long)]
    pub all: bool,
}
