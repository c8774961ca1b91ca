//! Sweep command implementation.

use hostsweep_core::range::COMMON_PREFIXES;
use hostsweep_core::{AddressRange, SweepMode, Sweeper};
use tracing::debug;

use super::build_prober;
use crate::cli::SweepArgs;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::progress::CliProgress;

/// Run the sweep command
pub async fn run_sweep(args: SweepArgs, timeout: u64, port: u16, json: bool) -> Result<(), CliError> {
    let ranges = build_ranges(&args)?;
    let formatter = get_formatter(json);

    let mode = if args.all {
        SweepMode::Exhaustive
    } else {
        SweepMode::FirstResponder
    };
    let sweeper = Sweeper::new(build_prober(timeout)?, mode).with_port(port);
    debug!(?mode, port, timeout, ranges = ranges.len(), "starting sweep");

    if !json {
        let total: usize = ranges.iter().map(AddressRange::len).sum();
        eprintln!(
            "Sweeping {} range(s), up to {} address(es), {} ms per probe...",
            ranges.len(),
            total,
            timeout
        );
    }

    let progress = if json {
        CliProgress::hidden()
    } else {
        CliProgress::new()
    };
    let reports = sweeper.sweep_ranges(&ranges, &progress).await;

    println!("{}", formatter.format_reports(&reports));
    Ok(())
}

fn build_ranges(args: &SweepArgs) -> Result<Vec<AddressRange>, CliError> {
    let prefixes: Vec<&str> = if args.common {
        COMMON_PREFIXES.to_vec()
    } else {
        args.prefixes.iter().map(String::as_str).collect()
    };

    prefixes
        .into_iter()
        .map(|prefix| -> Result<AddressRange, CliError> {
            Ok(AddressRange::parse(prefix)?.with_bounds(args.start, args.end)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(prefixes: &[&str], common: bool, start: u8, end: u8) -> SweepArgs {
        SweepArgs {
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            common,
            start,
            end,
            all: false,
        }
    }

    #[test]
    fn test_build_ranges_applies_bounds() {
        let ranges = build_ranges(&args(&["192.168.4", "10.0.0.0/24"], false, 1, 254)).unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].to_string(), "192.168.4.1-254");
        assert_eq!(ranges[1].len(), 254);
    }

    #[test]
    fn test_build_ranges_common() {
        let ranges = build_ranges(&args(&[], true, 0, 255)).unwrap();
        assert_eq!(ranges.len(), COMMON_PREFIXES.len());
    }

    #[test]
    fn test_build_ranges_errors() {
        let err = build_ranges(&args(&["192.168"], false, 0, 255)).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::exit_codes::INVALID_ARGS);

        assert!(build_ranges(&args(&["192.168.4"], false, 10, 5)).is_err());
    }
}
