//! Per-benchmark statistics text files.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AnalysisError;
use crate::report::{BenchmarkStats, StatsReport};

/// Write `<benchmark>_stats.txt` files into `stats_dir`, one configuration
/// block per file, overwriting any previous report.
///
/// Returns the written paths.
///
/// # Errors
///
/// Returns [`AnalysisError::OutputDir`] if `stats_dir` cannot be created
/// and [`AnalysisError::Write`] if a file cannot be written.
pub fn write_text_reports(
    stats_dir: &Path,
    report: &StatsReport,
) -> Result<Vec<PathBuf>, AnalysisError> {
    fs::create_dir_all(stats_dir).map_err(|source| AnalysisError::OutputDir {
        path: stats_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(report.benchmarks.len());
    for benchmark in &report.benchmarks {
        let path = stats_dir.join(format!("{}_stats.txt", benchmark.benchmark));
        fs::write(&path, format_benchmark(benchmark)?).map_err(|source| AnalysisError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote statistics report");
        written.push(path);
    }
    Ok(written)
}

fn format_benchmark(benchmark: &BenchmarkStats) -> Result<String, AnalysisError> {
    let mut out = String::new();
    for entry in &benchmark.configurations {
        let stats = &entry.stats;
        writeln!(out, "Configuration: {}", entry.configuration)?;
        writeln!(out, "  Mean: {:.6}", stats.mean)?;
        writeln!(out, "  Median: {:.6}", stats.median)?;
        writeln!(out, "  Std Dev: {:.6}", stats.std_dev)?;
        writeln!(out, "  Min: {:.6}", stats.min)?;
        writeln!(out, "  Max: {:.6}", stats.max)?;
        writeln!(out)?;
    }
    Ok(out)
}
