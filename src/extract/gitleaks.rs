//! Gitleaks secret-detection findings.
//!
//! The report is newline-delimited JSON. Field casing changed across
//! gitleaks major versions, so each attribute tries the current name
//! before the legacy one. The format carries no severity.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};

pub const REPORT_FILE: &str = "gitleaks-report.jsonl";
pub const SECTION_NAME: &str = "Gitleaks";

pub fn extract(record: &RawRecord) -> NormalizedFinding {
    let description = fields::first_str(
        record,
        &[&["Description"], &["RuleID"], &["rule"]],
        "Hardcoded secret",
    );
    let file = fields::first_str(record, &[&["File"], &["file"]], "unknown");

    let mut finding = NormalizedFinding::new(UNKNOWN_SEVERITY, description, "File", file);
    if let Some(line) = fields::opt_display(record, &[&["StartLine"], &["line"]]) {
        finding = finding.with_extra("Line", line);
    }
    if let Some(commit) = fields::opt_display(record, &[&["Commit"], &["commit"]]) {
        finding = finding.with_extra("Commit", commit);
    }
    finding
}
