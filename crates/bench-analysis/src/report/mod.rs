//! Statistics reporting.
//!
//! Three persisted forms:
//!
//! - per-benchmark text files, one configuration block each (`text`)
//! - a single JSON document for machine consumption (`json`)
//! - an annotation line appended inside each results file (`annotate`)
//!
//! Report files are regenerated from scratch on every run; nothing here
//! appends across invocations.

mod annotate;
mod json;
mod text;

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::AnalysisConfig;
use crate::discover::{discover_benchmarks, gather_benchmark};
use crate::error::AnalysisError;
use crate::stats::SummaryStats;

pub use annotate::{annotate_results_file, annotate_tree};
pub use json::JsonReporter;
pub use text::write_text_reports;

/// Statistics for every discovered benchmark across configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Result root the report was computed from
    pub root: PathBuf,
    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
    /// One entry per benchmark with data
    pub benchmarks: Vec<BenchmarkStats>,
}

/// Statistics of one benchmark across configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub benchmark: String,
    /// One entry per configuration with data, in configured order
    pub configurations: Vec<ConfigurationStats>,
}

/// Statistics of one (benchmark, configuration) sample set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationStats {
    pub configuration: String,
    pub stats: SummaryStats,
}

/// Discover benchmarks, load their sample sets, and compute statistics.
///
/// Benchmarks or configurations without data are skipped with a
/// diagnostic; only the reference directory being unreadable is an error.
pub fn build_report(config: &AnalysisConfig) -> Result<StatsReport, AnalysisError> {
    let benchmarks = discover_benchmarks(&config.reference_dir())?;

    let mut records = Vec::new();
    for benchmark in benchmarks {
        let series = gather_benchmark(&config.root_dir, &config.configurations, &benchmark);
        let configurations: Vec<ConfigurationStats> = series
            .iter()
            .filter_map(|(configuration, samples)| {
                SummaryStats::from_samples(samples).map(|stats| ConfigurationStats {
                    configuration: configuration.clone(),
                    stats,
                })
            })
            .collect();

        if configurations.is_empty() {
            warn!(%benchmark, "no data in any configuration");
            continue;
        }
        records.push(BenchmarkStats {
            benchmark,
            configurations,
        });
    }

    Ok(StatsReport {
        root: config.root_dir.clone(),
        generated_at: Utc::now().to_rfc3339(),
        benchmarks: records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_report_skips_dataless_benchmarks() {
        let root = tempfile::tempdir().unwrap();
        let baseline = root.path().join("baseline");
        fs::create_dir_all(&baseline).unwrap();
        fs::write(baseline.join("foo_results.txt"), "1.0\n2.0\n").unwrap();
        fs::write(baseline.join("empty_results.txt"), "\n").unwrap();

        let config = AnalysisConfig::from_str(&format!(
            "root_dir = {:?}\nconfigurations = [\"baseline\"]\n",
            root.path()
        ))
        .unwrap();

        let report = build_report(&config).unwrap();
        assert_eq!(report.benchmarks.len(), 1);
        assert_eq!(report.benchmarks[0].benchmark, "foo");
        let stats = &report.benchmarks[0].configurations[0].stats;
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 1500.0);
    }

    #[test]
    fn test_build_report_missing_reference_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::from_str(&format!("root_dir = {:?}\n", root.path())).unwrap();

        assert!(build_report(&config).is_err());
    }
}
