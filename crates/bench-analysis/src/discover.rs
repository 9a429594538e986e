//! Benchmark discovery and per-configuration file lookup.
//!
//! Result files follow two naming conventions, depending on which
//! extraction path produced them:
//!
//! - `<benchmark>_results.txt`
//! - `<benchmark>_execution_time.txt`
//!
//! `_results.txt` wins when both exist for the same benchmark. The set of
//! benchmarks is defined by the reference configuration directory alone; a
//! benchmark present only in some other configuration is never discovered.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::AnalysisError;
use crate::samples::load_samples;

pub const RESULTS_SUFFIX: &str = "_results.txt";
pub const EXECUTION_TIME_SUFFIX: &str = "_execution_time.txt";

/// Discover the benchmark universe from a reference configuration directory.
///
/// Returns the sorted, distinct benchmark name prefixes of all files
/// matching either suffix convention.
///
/// # Errors
///
/// Returns [`AnalysisError::Read`] if the directory cannot be listed.
pub fn discover_benchmarks(reference_dir: &Path) -> Result<Vec<String>, AnalysisError> {
    let entries = fs::read_dir(reference_dir).map_err(|source| AnalysisError::Read {
        path: reference_dir.to_path_buf(),
        source,
    })?;

    let mut benchmarks = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|source| AnalysisError::Read {
            path: reference_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if let Some(prefix) = name.strip_suffix(RESULTS_SUFFIX) {
            benchmarks.insert(prefix.to_string());
        } else if let Some(prefix) = name.strip_suffix(EXECUTION_TIME_SUFFIX) {
            benchmarks.insert(prefix.to_string());
        }
    }
    Ok(benchmarks.into_iter().collect())
}

/// Map benchmark names to their sample file within one configuration
/// directory.
///
/// When a benchmark has both spellings, the `_results.txt` path is kept.
/// A missing directory yields an empty map (that configuration simply has
/// no data).
pub fn benchmark_files(config_dir: &Path) -> BTreeMap<String, PathBuf> {
    let mut files = BTreeMap::new();
    let Ok(entries) = fs::read_dir(config_dir) else {
        return files;
    };

    let mut fallbacks = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if let Some(prefix) = name.strip_suffix(RESULTS_SUFFIX) {
            files.insert(prefix.to_string(), entry.path());
        } else if let Some(prefix) = name.strip_suffix(EXECUTION_TIME_SUFFIX) {
            fallbacks.push((prefix.to_string(), entry.path()));
        }
    }
    for (benchmark, path) in fallbacks {
        files.entry(benchmark).or_insert(path);
    }
    files
}

/// Locate the sample file for one benchmark in one configuration directory,
/// preferring the `_results.txt` spelling.
pub fn sample_file(config_dir: &Path, benchmark: &str) -> Option<PathBuf> {
    let results = config_dir.join(format!("{benchmark}{RESULTS_SUFFIX}"));
    if results.exists() {
        return Some(results);
    }
    let execution_time = config_dir.join(format!("{benchmark}{EXECUTION_TIME_SUFFIX}"));
    execution_time.exists().then_some(execution_time)
}

/// Gather one benchmark's sample sets across configurations.
///
/// Configurations with a missing file or no valid samples are skipped with
/// a diagnostic; the returned pairs preserve the order of `configurations`.
pub fn gather_benchmark(
    root: &Path,
    configurations: &[String],
    benchmark: &str,
) -> Vec<(String, Vec<f64>)> {
    let mut series = Vec::new();
    for configuration in configurations {
        let config_dir = root.join(configuration);
        let Some(path) = sample_file(&config_dir, benchmark) else {
            warn!(
                benchmark,
                %configuration,
                "no sample file for this configuration"
            );
            continue;
        };
        match load_samples(&path) {
            Ok(samples) => series.push((configuration.clone(), samples)),
            Err(err) => warn!(benchmark, %configuration, "skipping: {err}"),
        }
    }
    series
}
