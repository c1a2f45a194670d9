//! Run configuration resolved from the command line.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// Default filename of the combined report, inside the report directory.
pub const OUTPUT_FILENAME: &str = "final-security-report.txt";

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory the scanner report files are read from.
    pub report_dir: PathBuf,
    /// Path the combined report is written to.
    pub output_path: PathBuf,
}

impl ReportConfig {
    /// Resolve the configuration from CLI arguments, applying defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let report_dir = cli.report_dir.clone();
        let output_path = cli
            .output
            .clone()
            .unwrap_or_else(|| report_dir.join(OUTPUT_FILENAME));
        Self {
            report_dir,
            output_path,
        }
    }

    /// Configuration rooted at an explicit directory, with the default
    /// output filename.
    pub fn for_dir(report_dir: impl AsRef<Path>) -> Self {
        let report_dir = report_dir.as_ref().to_path_buf();
        let output_path = report_dir.join(OUTPUT_FILENAME);
        Self {
            report_dir,
            output_path,
        }
    }

    /// Full path of one scanner's report file.
    pub fn input_path(&self, filename: &str) -> PathBuf {
        self.report_dir.join(filename)
    }
}
