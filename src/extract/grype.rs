//! Grype dependency-vulnerability findings.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};

pub const REPORT_FILE: &str = "grype-report.json";
pub const RECORDS_FIELD: &str = "matches";
pub const SECTION_NAME: &str = "Grype";

pub fn extract(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["vulnerability", "severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(
        record,
        &[&["vulnerability", "id"]],
        "Unknown vulnerability",
    );
    let name = fields::first_str(record, &[&["artifact", "name"]], "unknown");
    let version = fields::first_str(record, &[&["artifact", "version"]], "unknown");

    let mut finding = NormalizedFinding::new(
        &severity,
        description,
        "Package",
        format!("{} {}", name, version),
    );
    if let Some(state) = fields::opt_display(record, &[&["vulnerability", "fix", "state"]]) {
        finding = finding.with_extra("Fix", state);
    }
    finding
}
