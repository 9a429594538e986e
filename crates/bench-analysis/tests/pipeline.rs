//! End-to-end tests over a temporary result tree.
//!
//! Run with: cargo test -p bench-analysis --test pipeline

use std::fs;
use std::path::Path;

use bench_analysis::config::AnalysisConfig;
use bench_analysis::plot::{render_benchmarks, PlotStyle};
use bench_analysis::report::{annotate_tree, build_report, write_text_reports, JsonReporter};
use bench_analysis::StatsReport;

fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

/// A result tree mixing both filename conventions and both line formats.
fn populate_tree(root: &Path) {
    let baseline = root.join("baseline");
    let cpu8 = root.join("cpu8");
    write_file(&baseline, "foo_results.txt", "70656 ns\n70712 ns\n");
    write_file(&baseline, "bar_execution_time.txt", "3.0\n");
    write_file(&cpu8, "foo_execution_time.txt", "1.0\n2.0\n");
    // cpu8 has no data for bar; fork8 has no directory at all.
}

fn config_for(root: &Path) -> AnalysisConfig {
    AnalysisConfig::from_str(&format!(
        r#"
            root_dir = {root:?}
            configurations = ["baseline", "cpu8", "fork8"]

            [plot]
            width = 320
            height = 240
        "#
    ))
    .unwrap()
}

#[test]
fn stats_pipeline_writes_expected_text_reports() {
    let tree = tempfile::tempdir().unwrap();
    populate_tree(tree.path());
    let config = config_for(tree.path());

    let report = build_report(&config).unwrap();
    assert_eq!(report.benchmarks.len(), 2);
    assert_eq!(report.benchmarks[0].benchmark, "bar");
    assert_eq!(report.benchmarks[1].benchmark, "foo");

    let written = write_text_reports(&config.stats_dir(), &report).unwrap();
    assert_eq!(written.len(), 2);

    let foo = fs::read_to_string(config.stats_dir().join("foo_stats.txt")).unwrap();
    assert_eq!(
        foo,
        "Configuration: baseline\n\
         \x20 Mean: 0.070684\n\
         \x20 Median: 0.070684\n\
         \x20 Std Dev: 0.000028\n\
         \x20 Min: 0.070656\n\
         \x20 Max: 0.070712\n\
         \n\
         Configuration: cpu8\n\
         \x20 Mean: 1500.000000\n\
         \x20 Median: 1500.000000\n\
         \x20 Std Dev: 500.000000\n\
         \x20 Min: 1000.000000\n\
         \x20 Max: 2000.000000\n\n"
    );

    let bar = fs::read_to_string(config.stats_dir().join("bar_stats.txt")).unwrap();
    assert!(bar.starts_with("Configuration: baseline\n"));
    assert!(!bar.contains("cpu8"));
}

#[test]
fn json_report_round_trips_through_disk() {
    let tree = tempfile::tempdir().unwrap();
    populate_tree(tree.path());
    let config = config_for(tree.path());

    let report = build_report(&config).unwrap();
    let path = tree.path().join("stats.json");
    JsonReporter::write_to_file(&report, &path, true).unwrap();

    let parsed: StatsReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.benchmarks.len(), 2);
    let foo = parsed.benchmarks.iter().find(|b| b.benchmark == "foo").unwrap();
    assert_eq!(foo.configurations.len(), 2);
    assert_eq!(foo.configurations[1].stats.mean, 1500.0);
}

#[test]
fn annotation_does_not_change_derived_statistics() {
    let tree = tempfile::tempdir().unwrap();
    populate_tree(tree.path());
    let config = config_for(tree.path());

    let before = build_report(&config).unwrap();
    // Only the *_results.txt file is annotated, and a second pass is a
    // no-op for file contents.
    assert_eq!(annotate_tree(tree.path()).unwrap(), 1);
    assert_eq!(annotate_tree(tree.path()).unwrap(), 1);
    let after = build_report(&config).unwrap();

    for (b, a) in before.benchmarks.iter().zip(&after.benchmarks) {
        assert_eq!(b.benchmark, a.benchmark);
        for (cb, ca) in b.configurations.iter().zip(&a.configurations) {
            assert_eq!(cb.stats.count, ca.stats.count);
            assert_eq!(cb.stats.mean, ca.stats.mean);
            assert_eq!(cb.stats.std_dev, ca.stats.std_dev);
        }
    }
}

#[test]
fn plot_pipeline_writes_one_image_per_style() {
    let tree = tempfile::tempdir().unwrap();
    populate_tree(tree.path());
    let config = config_for(tree.path());

    render_benchmarks(&config).unwrap();

    for benchmark in ["foo", "bar"] {
        for style in PlotStyle::ALL {
            let path = config
                .plots_dir()
                .join(style.dir_name())
                .join(format!("{benchmark}_{}.png", style.file_suffix()));
            assert!(path.exists(), "missing {path:?}");
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
