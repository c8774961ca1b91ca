//! JSON-formatted output for CLI.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use hostsweep_core::{ProbeResult, RangeReport};

use super::{OutputFormatter, Summary};

pub struct JsonOutput {
    scanned_at: DateTime<Utc>,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(scanned_at: DateTime<Utc>) -> Self {
        Self { scanned_at }
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn timestamp(&self) -> String {
        self.scanned_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn result_value(result: &ProbeResult) -> Value {
        json!({
            "address": result.target.address(),
            "port": result.target.port(),
            "status": result.status,
        })
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_results(&self, results: &[ProbeResult]) -> String {
        let items: Vec<Value> = results.iter().map(Self::result_value).collect();

        Self::to_json(&json!({
            "scannedAt": self.timestamp(),
            "results": items,
            "summary": Summary::from_results(results),
        }))
    }

    fn format_reports(&self, reports: &[RangeReport]) -> String {
        let ranges: Vec<Value> = reports
            .iter()
            .map(|report| {
                let found: Vec<String> = report.found().iter().map(|t| t.to_string()).collect();
                json!({
                    "range": report.range.to_string(),
                    "found": found,
                    "results": report.results.iter().map(Self::result_value).collect::<Vec<_>>(),
                    "summary": Summary::from_results(&report.results),
                })
            })
            .collect();

        let summary = Summary::from_results(reports.iter().flat_map(|r| r.results.iter()));

        Self::to_json(&json!({
            "scannedAt": self.timestamp(),
            "ranges": ranges,
            "summary": summary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use hostsweep_core::{AddressRange, ProbeStatus, ProbeTarget};

    fn formatter() -> JsonOutput {
        JsonOutput::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_format_results() {
        let results = vec![
            ProbeResult::new(ProbeTarget::new("192.168.4.10"), ProbeStatus::Responded),
            ProbeResult::new(ProbeTarget::with_port("192.168.4.11", 8080), ProbeStatus::Timeout),
        ];

        let value: Value = serde_json::from_str(&formatter().format_results(&results)).unwrap();

        assert_eq!(value["scannedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(value["results"][0]["address"], "192.168.4.10");
        assert_eq!(value["results"][0]["status"], "responded");
        assert_eq!(value["results"][1]["port"], 8080);
        assert_eq!(value["results"][1]["status"], "timeout");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["noResponse"], 0);
    }

    #[test]
    fn test_format_reports() {
        let range = AddressRange::parse("192.168.4").unwrap().with_bounds(0, 1).unwrap();
        let report = RangeReport {
            range,
            results: vec![
                ProbeResult::new(ProbeTarget::new("192.168.4.0"), ProbeStatus::NoResponse),
                ProbeResult::new(ProbeTarget::new("192.168.4.1"), ProbeStatus::Responded),
            ],
        };

        let value: Value = serde_json::from_str(&formatter().format_reports(&[report])).unwrap();

        assert_eq!(value["ranges"][0]["range"], "192.168.4.0-1");
        assert_eq!(value["ranges"][0]["found"][0], "192.168.4.1");
        assert_eq!(value["ranges"][0]["results"][0]["status"], "no response");
        assert_eq!(value["summary"]["responded"], 1);
        assert_eq!(value["summary"]["total"], 2);
    }
}
