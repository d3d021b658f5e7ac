use serde::Serialize;

use crate::checker::ResultReport;
use crate::error::Result;
use crate::rules::TargetVersion;
use crate::scan::ScanOutcome;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: String,
    version: TargetVersion,
    results: &'a ResultReport,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &ScanOutcome) -> Result<String> {
        let output = JsonOutput {
            path: outcome.model.path.display().to_string(),
            version: outcome.target_version,
            results: &outcome.report,
        };
        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
