//! Command-line driver for benchmark execution-time analysis.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bench_analysis::config::AnalysisConfig;
use bench_analysis::extract::extract_log;
use bench_analysis::plot::{render_benchmarks, render_comparison};
use bench_analysis::report::{annotate_tree, build_report, write_text_reports, JsonReporter};

#[derive(Parser, Debug)]
#[command(name = "bench-report")]
#[command(
    version,
    about = "Extract benchmark timings, compute statistics, render comparison plots"
)]
struct Args {
    /// Path to the analysis configuration file
    #[arg(short, long, default_value = "analysis.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a raw log file and append extracted timings to per-benchmark
    /// result files in a configuration directory
    Extract {
        /// Log file to scan
        log: PathBuf,
        /// Configuration whose directory receives the result files
        #[arg(short = 'n', long)]
        configuration: String,
    },
    /// Recompute the trailing statistics annotation of every results file
    Annotate,
    /// Write per-benchmark statistics files and a JSON report
    Stats,
    /// Render standard, box, violin, CDF, and error-bar plots per benchmark
    Plot,
    /// Render cross-solution comparison figures
    Compare,
    /// Run stats and plot in one pass
    All,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = AnalysisConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    match args.command {
        Command::Extract { log, configuration } => {
            let out_dir = config.configuration_dir(&configuration);
            let summary = extract_log(&log, &out_dir)?;
            info!(
                benchmarks = summary.samples_per_benchmark.len(),
                samples = summary.total(),
                "extracted into {}",
                out_dir.display()
            );
        }
        Command::Annotate => {
            let annotated = annotate_tree(&config.root_dir)?;
            info!(annotated, "annotated result files");
        }
        Command::Stats => run_stats(&config)?,
        Command::Plot => render_benchmarks(&config)?,
        Command::Compare => render_comparison(&config)?,
        Command::All => {
            run_stats(&config)?;
            render_benchmarks(&config)?;
        }
    }
    Ok(())
}

fn run_stats(config: &AnalysisConfig) -> Result<()> {
    let report = build_report(config).context("Failed to build statistics report")?;
    let stats_dir = config.stats_dir();
    let written = write_text_reports(&stats_dir, &report)?;
    JsonReporter::write_to_file(&report, stats_dir.join("stats.json"), true)?;
    info!(
        benchmarks = report.benchmarks.len(),
        files = written.len() + 1,
        "statistics written to {}",
        stats_dir.display()
    );
    Ok(())
}
