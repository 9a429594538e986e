//! In-file statistics annotation.
//!
//! Each `*_results.txt` file gets one trailing line:
//!
//! ```text
//! Statistics - Mean: 70684.000000, Median: 70684.000000, Std Dev: 28.000000, Min: 70656.000000, Max: 70712.000000
//! ```
//!
//! The file is rewritten with its sample lines followed by exactly one
//! fresh annotation, so repeated runs converge instead of accumulating
//! duplicate annotation lines.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::samples::{parse_line, ParsedLine, STATS_PREFIX};
use crate::stats::SummaryStats;

/// Recompute and rewrite the annotation of one results file.
///
/// All non-annotation lines are kept verbatim, in order; any number of
/// previous `Statistics -` lines is replaced by a single fresh one.
///
/// # Errors
///
/// Returns [`AnalysisError::NoData`] when no line parses as a sample (the
/// file is left untouched), plus the usual read/write failures.
pub fn annotate_results_file(path: &Path) -> Result<SummaryStats, AnalysisError> {
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut retained = Vec::new();
    let mut samples = Vec::new();
    for line in content.lines() {
        if line.trim_start().starts_with(STATS_PREFIX) {
            continue;
        }
        retained.push(line);
        if let ParsedLine::Sample(ms) = parse_line(line) {
            samples.push(ms);
        }
    }

    let stats = SummaryStats::from_samples(&samples).ok_or_else(|| AnalysisError::NoData {
        path: path.to_path_buf(),
    })?;

    let mut output = retained.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!(
        "{STATS_PREFIX} Mean: {:.6}, Median: {:.6}, Std Dev: {:.6}, Min: {:.6}, Max: {:.6}\n",
        stats.mean, stats.median, stats.std_dev, stats.min, stats.max
    ));

    fs::write(path, output).map_err(|source| AnalysisError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(stats)
}

/// Annotate every `*_results.txt` file under `root`, recursively.
///
/// Files without data are skipped with a diagnostic. Returns the number of
/// files annotated.
pub fn annotate_tree(root: &Path) -> Result<usize, AnalysisError> {
    let mut annotated = 0;
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| AnalysisError::Read {
            path: dir.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_results_file(&path) {
                match annotate_results_file(&path) {
                    Ok(_) => annotated += 1,
                    Err(err @ AnalysisError::NoData { .. }) => warn!("skipping: {err}"),
                    Err(err) => return Err(err),
                }
            }
        }
    }

    info!(root = %root.display(), annotated, "annotation finished");
    Ok(annotated)
}

fn is_results_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(crate::discover::RESULTS_SUFFIX))
}
