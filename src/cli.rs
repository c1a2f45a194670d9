use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "secrep",
    version,
    about = "Merge heterogeneous security scanner reports into one text report",
    long_about = "secrep reads the JSON and JSON-Lines reports produced by Bandit, Semgrep, \
Grype, Trivy, Gitleaks and Nuclei from a report directory and combines them into a single \
human-readable security report. Missing or unparsable reports degrade to placeholder \
sections instead of failing the run."
)]
pub struct Cli {
    /// Directory containing the scanner report files
    #[arg(short = 'd', long, default_value = "reports")]
    pub report_dir: PathBuf,

    /// Path of the combined report (defaults to <REPORT_DIR>/final-security-report.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
