//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use hostsweep_core::{ProbeResult, ProbeStatus, RangeReport};
use serde::Serialize;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format results of individually probed addresses
    fn format_results(&self, results: &[ProbeResult]) -> String;

    /// Format per-range sweep reports
    fn format_reports(&self, reports: &[RangeReport]) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}

/// Status counts over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub responded: usize,
    pub no_response: usize,
    pub timeout: usize,
}

impl Summary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ProbeResult>,
    {
        let mut summary = Summary::default();
        for result in results {
            summary.total += 1;
            match result.status {
                ProbeStatus::Responded => summary.responded += 1,
                ProbeStatus::NoResponse => summary.no_response += 1,
                ProbeStatus::Timeout => summary.timeout += 1,
            }
        }
        summary
    }
}
