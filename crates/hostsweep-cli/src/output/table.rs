//! Table-formatted output for CLI.

use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use hostsweep_core::{ProbeResult, ProbeStatus, RangeReport};

use super::{OutputFormatter, Summary};

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn status_cell(status: ProbeStatus) -> Cell {
        match status {
            ProbeStatus::Responded => Cell::new(status.as_str()).fg(Color::Green),
            ProbeStatus::NoResponse => Cell::new(status.as_str()).fg(Color::Red),
            ProbeStatus::Timeout => Cell::new(status.as_str()).fg(Color::Yellow),
        }
    }

    fn summary_line(summary: &Summary) -> String {
        format!(
            "Summary: {} responded, {} no response, {} timeout ({} probed)",
            summary.responded.to_string().green(),
            summary.no_response.to_string().red(),
            summary.timeout.to_string().yellow(),
            summary.total
        )
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_results(&self, results: &[ProbeResult]) -> String {
        if results.is_empty() {
            return "No addresses probed.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Address", "Port", "Status"]);

        for result in results {
            table.add_row(vec![
                Cell::new(result.target.address()),
                Cell::new(result.target.port().to_string()),
                Self::status_cell(result.status),
            ]);
        }

        format!("{}\n\n{}", table, Self::summary_line(&Summary::from_results(results)))
    }

    fn format_reports(&self, reports: &[RangeReport]) -> String {
        let mut sections = Vec::new();

        for report in reports {
            let summary = Summary::from_results(&report.results);
            let found = report.found();

            let mut lines = vec![format!("Range {}", report.range.to_string().bold())];
            if found.is_empty() {
                lines.push("  No devices found.".to_string());
            } else {
                for target in found {
                    lines.push(format!("  {} Device found at {}", "[+]".green(), target));
                }
            }
            lines.push(format!("  {}", Self::summary_line(&summary)));
            sections.push(lines.join("\n"));
        }

        let total = Summary::from_results(reports.iter().flat_map(|r| r.results.iter()));
        format!(
            "{}\n\nFound {} device(s)",
            sections.join("\n\n"),
            total.responded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hostsweep_core::{AddressRange, ProbeTarget};

    #[test]
    fn test_format_results_lists_every_address() {
        colored::control::set_override(false);
        let results = vec![
            ProbeResult::new(ProbeTarget::new("10.0.0.1"), ProbeStatus::Responded),
            ProbeResult::new(ProbeTarget::new("10.0.0.2"), ProbeStatus::Timeout),
        ];

        let out = TableOutput::new().format_results(&results);

        assert!(out.contains("10.0.0.1"));
        assert!(out.contains("10.0.0.2"));
        assert!(out.contains("timeout"));
        assert!(out.contains("1 responded, 0 no response, 1 timeout (2 probed)"));
    }

    #[test]
    fn test_format_reports_quiet_range() {
        colored::control::set_override(false);
        let report = RangeReport {
            range: AddressRange::parse("10.0.0").unwrap(),
            results: vec![ProbeResult::new(
                ProbeTarget::new("10.0.0.0"),
                ProbeStatus::NoResponse,
            )],
        };

        let out = TableOutput::new().format_reports(&[report]);

        assert!(out.contains("Range 10.0.0.0-255"));
        assert!(out.contains("No devices found."));
        assert!(out.ends_with("Found 0 device(s)"));
    }
}
