//! Sample parsing and loading.
//!
//! Result files carry one measurement per line. Two spellings occur in the
//! wild, depending on which extraction path produced the file:
//!
//! - `1854131 ns`: an integer or decimal nanosecond count
//! - `1.853`: a bare decimal, which is always a value in **seconds**
//!
//! Both are normalized to milliseconds before any aggregation so that files
//! from different extraction paths stay numerically comparable. The
//! bare-number-means-seconds rule is a fixed convention of the result-file
//! format, not a guess; callers must not reinterpret bare numbers as
//! already-canonical values.
//!
//! Lines that are empty or start with [`STATS_PREFIX`] are annotations and
//! are skipped without comment. Anything else is reported and dropped.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::error::AnalysisError;

/// Prefix of the per-file statistics annotation line.
pub const STATS_PREFIX: &str = "Statistics -";

fn ns_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]*\.?[0-9]+)\s*ns$").expect("static pattern"))
}

/// Outcome of parsing one line of a result file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedLine {
    /// A measurement, normalized to milliseconds.
    Sample(f64),
    /// A blank line or a statistics annotation; skipped silently.
    Annotation,
    /// Unrecognized content; skipped with a diagnostic.
    Invalid,
}

/// Parse one line of a result file.
///
/// Rules are applied in order:
///
/// 1. Empty (after trimming) or `Statistics -`-prefixed lines are
///    annotations.
/// 2. `<number> ns` is a nanosecond count; divided by 1,000,000.
/// 3. A bare decimal is a value in seconds; multiplied by 1,000.
/// 4. Anything else is invalid.
///
/// # Examples
///
/// ```
/// use bench_analysis::samples::{parse_line, ParsedLine};
///
/// assert_eq!(parse_line("1854131 ns"), ParsedLine::Sample(1.854131));
/// assert_eq!(parse_line("1.853"), ParsedLine::Sample(1853.0));
/// assert_eq!(parse_line("Statistics - Mean: 1.0"), ParsedLine::Annotation);
/// assert_eq!(parse_line("garbage"), ParsedLine::Invalid);
/// ```
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(STATS_PREFIX) {
        return ParsedLine::Annotation;
    }

    if let Some(caps) = ns_pattern().captures(trimmed) {
        if let Ok(ns) = caps[1].parse::<f64>() {
            return ParsedLine::Sample(ns / 1_000_000.0);
        }
    }

    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => {
            ParsedLine::Sample(seconds * 1000.0)
        }
        _ => ParsedLine::Invalid,
    }
}

/// Load the ordered sample set from a result file.
///
/// Annotation lines are skipped; invalid lines are reported via `tracing`
/// and skipped. Retained samples keep their original line order.
///
/// # Errors
///
/// Returns [`AnalysisError::Read`] if the file cannot be read and
/// [`AnalysisError::NoData`] if no line yields a sample. Callers treat both
/// as "skip this unit of work", not as run-fatal conditions.
pub fn load_samples(path: &Path) -> Result<Vec<f64>, AnalysisError> {
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            ParsedLine::Sample(ms) => samples.push(ms),
            ParsedLine::Annotation => {}
            ParsedLine::Invalid => {
                warn!(
                    path = %path.display(),
                    line_number = number + 1,
                    "skipping unparseable line: {line:?}"
                );
            }
        }
    }

    if samples.is_empty() {
        return Err(AnalysisError::NoData {
            path: path.to_path_buf(),
        });
    }
    Ok(samples)
}
