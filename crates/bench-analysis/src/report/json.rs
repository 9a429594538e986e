//! JSON reporter for aggregated statistics

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;
use crate::report::StatsReport;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a statistics report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The report to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &StatsReport, pretty: bool) -> Result<String, AnalysisError> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }

    /// Write a statistics report to a file
    pub fn write_to_file<P: AsRef<Path>>(
        report: &StatsReport,
        path: P,
        pretty: bool,
    ) -> Result<(), AnalysisError> {
        let path = path.as_ref();
        let output = Self::format(report, pretty)?;
        fs::write(path, output).map_err(|source| AnalysisError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
