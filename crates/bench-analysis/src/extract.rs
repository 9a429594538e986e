//! Execution-time extraction from raw benchmark logs.
//!
//! UART/console logs interleave benchmark timings with boot noise. Each
//! timing line looks like
//!
//! ```text
//! Benchmark adpcm_dec execution time:  70656 ns
//! ```
//!
//! (some firmware builds print `execution time is:`). Matching lines are
//! appended as `<n> ns` to `<benchmark>_results.txt` in the target
//! configuration directory; everything else is ignored.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use crate::discover::RESULTS_SUFFIX;
use crate::error::AnalysisError;

fn benchmark_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Benchmark\s+(\S+)\s+execution time(?:\s+is)?:\s+(\d+)\s+ns")
            .expect("static pattern")
    })
}

/// What one extraction run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Samples appended per benchmark
    pub samples_per_benchmark: BTreeMap<String, usize>,
}

impl ExtractSummary {
    /// Total number of extracted samples.
    pub fn total(&self) -> usize {
        self.samples_per_benchmark.values().sum()
    }
}

/// Scan a log file and append extracted timings to per-benchmark result
/// files under `out_dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`AnalysisError::OutputDir`] if `out_dir` cannot be created,
/// [`AnalysisError::Read`] if the log cannot be read, and
/// [`AnalysisError::Write`] if a result file cannot be appended to.
pub fn extract_log(log_path: &Path, out_dir: &Path) -> Result<ExtractSummary, AnalysisError> {
    fs::create_dir_all(out_dir).map_err(|source| AnalysisError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let content = fs::read_to_string(log_path).map_err(|source| AnalysisError::Read {
        path: log_path.to_path_buf(),
        source,
    })?;

    let mut summary = ExtractSummary::default();
    for line in content.lines() {
        let Some(caps) = benchmark_pattern().captures(line) else {
            continue;
        };
        let benchmark = &caps[1];
        let nanoseconds = &caps[2];

        let path = out_dir.join(format!("{benchmark}{RESULTS_SUFFIX}"));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| AnalysisError::Write {
                path: path.clone(),
                source,
            })?;
        writeln!(file, "{nanoseconds} ns").map_err(|source| AnalysisError::Write {
            path: path.clone(),
            source,
        })?;

        *summary
            .samples_per_benchmark
            .entry(benchmark.to_string())
            .or_default() += 1;
    }

    info!(
        log = %log_path.display(),
        benchmarks = summary.samples_per_benchmark.len(),
        samples = summary.total(),
        "extraction finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_extract_appends_ns_lines() {
        let log_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let log_path = log_dir.path().join("open8_uart_log.txt");

        let mut log = fs::File::create(&log_path).unwrap();
        writeln!(log, "[    3.141] booting cell").unwrap();
        writeln!(log, "Benchmark adpcm_dec execution time:  70656 ns").unwrap();
        writeln!(log, "Benchmark adpcm_dec execution time:  70712 ns").unwrap();
        writeln!(log, "Benchmark cjpeg_wrbmp execution time is: 1854131 ns").unwrap();
        writeln!(log, "unrelated noise").unwrap();
        drop(log);

        let summary = extract_log(&log_path, out_dir.path()).unwrap();
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.samples_per_benchmark["adpcm_dec"], 2);
        assert_eq!(summary.samples_per_benchmark["cjpeg_wrbmp"], 1);

        let adpcm = fs::read_to_string(out_dir.path().join("adpcm_dec_results.txt")).unwrap();
        assert_eq!(adpcm, "70656 ns\n70712 ns\n");
        let cjpeg = fs::read_to_string(out_dir.path().join("cjpeg_wrbmp_results.txt")).unwrap();
        assert_eq!(cjpeg, "1854131 ns\n");
    }

    #[test]
    fn test_extract_creates_missing_out_dir() {
        let log_dir = tempfile::tempdir().unwrap();
        let log_path = log_dir.path().join("log.txt");
        fs::write(&log_path, "Benchmark foo execution time: 5 ns\n").unwrap();

        let out_dir = log_dir.path().join("open8");
        let summary = extract_log(&log_path, &out_dir).unwrap();

        assert_eq!(summary.total(), 1);
        assert!(out_dir.join("foo_results.txt").exists());
    }

    #[test]
    fn test_extract_without_matches_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("log.txt");
        fs::write(&log_path, "no timings here\n").unwrap();

        let summary = extract_log(&log_path, dir.path()).unwrap();
        assert_eq!(summary, ExtractSummary::default());
    }

    #[test]
    fn test_extract_missing_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_log(Path::new("/nonexistent/log.txt"), dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Read { .. }));
    }
}
