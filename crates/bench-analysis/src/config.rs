//! Analysis configuration.
//!
//! Everything the original ad-hoc workflow kept as hard-coded constants
//! (result root, configuration list, output directories) lives in one TOML
//! file so each operation can be pointed at an arbitrary tree, including a
//! temporary one in tests.
//!
//! ```toml
//! root_dir = "results/ZIC-APU"
//! configurations = ["baseline", "cpu8", "fork8", "memcpy8", "open8", "udp8"]
//! reference = "baseline"
//!
//! [plot]
//! width = 1000
//! height = 600
//!
//! [compare]
//! output_dir = "compare_plots"
//! solutions = [
//!     { label = "Preempt-RT", root = "results/Preempt-RT-containers" },
//!     { label = "ZIC-APU", root = "results/ZIC-APU" },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Root directory holding one subdirectory per configuration
    pub root_dir: PathBuf,
    /// Experimental configurations, in presentation order
    #[serde(default = "default_configurations")]
    pub configurations: Vec<String>,
    /// Configuration whose directory defines the benchmark universe
    #[serde(default = "default_reference")]
    pub reference: String,
    /// Directory for statistics reports (default: `<root_dir>/stats`)
    #[serde(default)]
    pub stats_dir: Option<PathBuf>,
    /// Directory for rendered plots (default: `<root_dir>/plots`)
    #[serde(default)]
    pub plots_dir: Option<PathBuf>,
    /// Plot geometry
    #[serde(default)]
    pub plot: PlotConfig,
    /// Cross-solution comparison, when two measurement pipelines are compared
    #[serde(default)]
    pub compare: Option<CompareConfig>,
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnalysisError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> Result<Self, AnalysisError> {
        Ok(toml::from_str(s)?)
    }

    /// Directory of one configuration's result files.
    pub fn configuration_dir(&self, configuration: &str) -> PathBuf {
        self.root_dir.join(configuration)
    }

    /// Directory of the reference configuration.
    pub fn reference_dir(&self) -> PathBuf {
        self.configuration_dir(&self.reference)
    }

    /// Resolved statistics output directory.
    pub fn stats_dir(&self) -> PathBuf {
        self.stats_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join("stats"))
    }

    /// Resolved plot output directory.
    pub fn plots_dir(&self) -> PathBuf {
        self.plots_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join("plots"))
    }
}

fn default_configurations() -> Vec<String> {
    ["baseline", "cpu8", "fork8", "memcpy8", "open8", "udp8"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_reference() -> String {
    "baseline".to_string()
}

/// Pixel geometry of rendered figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Figure width in pixels (default: 1000)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Single-figure height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,
    /// Per-panel height for multi-panel comparison figures (default: 300)
    #[serde(default = "default_panel_height")]
    pub panel_height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            panel_height: default_panel_height(),
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_panel_height() -> u32 {
    300
}

/// Cross-solution comparison settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Directory for comparison figures
    pub output_dir: PathBuf,
    /// Independent measurement pipelines to compare, in presentation order
    pub solutions: Vec<Solution>,
}

/// One measurement pipeline in a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Display label, e.g. "Preempt-RT"
    pub label: String,
    /// Root directory holding per-configuration subdirectories
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            root_dir = "results"
        "#;

        let config = AnalysisConfig::from_str(toml).unwrap();
        assert_eq!(config.root_dir, PathBuf::from("results"));
        assert_eq!(
            config.configurations,
            vec!["baseline", "cpu8", "fork8", "memcpy8", "open8", "udp8"]
        );
        assert_eq!(config.reference, "baseline");
        assert_eq!(config.stats_dir(), PathBuf::from("results/stats"));
        assert_eq!(config.plots_dir(), PathBuf::from("results/plots"));
        assert_eq!(config.plot.width, 1000);
        assert_eq!(config.plot.height, 600);
        assert!(config.compare.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            root_dir = "results/ZIC-APU"
            configurations = ["baseline", "cpu8"]
            reference = "baseline"
            stats_dir = "out/stats"
            plots_dir = "out/plots"

            [plot]
            width = 800
            height = 480
            panel_height = 240

            [compare]
            output_dir = "out/compare"
            solutions = [
                { label = "Preempt-RT", root = "results/Preempt-RT-containers" },
                { label = "ZIC-APU", root = "results/ZIC-APU" },
            ]
        "#;

        let config = AnalysisConfig::from_str(toml).unwrap();
        assert_eq!(config.configurations, vec!["baseline", "cpu8"]);
        assert_eq!(config.stats_dir(), PathBuf::from("out/stats"));
        assert_eq!(config.plots_dir(), PathBuf::from("out/plots"));
        assert_eq!(config.plot.width, 800);
        assert_eq!(config.plot.panel_height, 240);

        let compare = config.compare.unwrap();
        assert_eq!(compare.output_dir, PathBuf::from("out/compare"));
        assert_eq!(compare.solutions.len(), 2);
        assert_eq!(compare.solutions[0].label, "Preempt-RT");
    }

    #[test]
    fn test_configuration_dir_layout() {
        let toml = r#"
            root_dir = "results"
        "#;
        let config = AnalysisConfig::from_str(toml).unwrap();

        assert_eq!(
            config.configuration_dir("cpu8"),
            PathBuf::from("results/cpu8")
        );
        assert_eq!(config.reference_dir(), PathBuf::from("results/baseline"));
    }

    #[test]
    fn test_missing_root_dir_is_an_error() {
        let toml = r#"
            reference = "baseline"
        "#;
        assert!(AnalysisConfig::from_str(toml).is_err());
    }
}
