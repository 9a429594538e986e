//! Benchmark execution-time analysis
//!
//! This crate turns trees of raw benchmark result files into summary
//! statistics and comparison plots. Result trees hold one directory per
//! experimental configuration, each containing per-benchmark sample files
//! (`<benchmark>_results.txt` or `<benchmark>_execution_time.txt`) with one
//! duration per line, normalized to milliseconds during parsing.
//!
//! # Features
//!
//! - **Extraction**: scrape `Benchmark <name> execution time: <n> ns` lines
//!   out of raw UART/console logs into per-benchmark result files
//! - **Statistics**: count, mean, median, population standard deviation,
//!   min, max per (benchmark, configuration) sample set
//! - **Reports**: per-benchmark text files, in-file annotation lines, and a
//!   JSON document
//! - **Plots**: standard (line), box, violin, CDF, and error-bar figures
//!   per benchmark, plus multi-panel cross-solution comparisons
//!
//! # Example
//!
//! ```no_run
//! use bench_analysis::config::AnalysisConfig;
//! use bench_analysis::report::{build_report, write_text_reports, JsonReporter};
//!
//! # fn example() -> Result<(), bench_analysis::error::AnalysisError> {
//! let config = AnalysisConfig::from_file("analysis.toml")?;
//! let report = build_report(&config)?;
//! write_text_reports(&config.stats_dir(), &report)?;
//! JsonReporter::write_to_file(&report, config.stats_dir().join("stats.json"), true)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod group;
pub mod plot;
pub mod report;
pub mod samples;
pub mod stats;

// Re-export main types for convenience
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use report::{build_report, StatsReport};
pub use stats::SummaryStats;
