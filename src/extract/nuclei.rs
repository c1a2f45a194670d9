//! Nuclei active template-scan findings.
//!
//! Newline-delimited JSON, one matched template per line. `matched-at`
//! replaced `matched` in newer nuclei releases.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};

pub const REPORT_FILE: &str = "nuclei-report.json";
pub const SECTION_NAME: &str = "Nuclei";

pub fn extract(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["info", "severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(record, &[&["info", "name"]], "Unknown template");
    let target = fields::first_str(record, &[&["matched-at"], &["matched"]], "unknown");

    let mut finding = NormalizedFinding::new(&severity, description, "Target", target);
    if let Some(template) = fields::opt_display(record, &[&["template-id"]]) {
        finding = finding.with_extra("Template", template);
    }
    finding
}
