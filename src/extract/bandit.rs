//! Bandit static-analysis findings.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};

pub const REPORT_FILE: &str = "bandit-report.json";
pub const RECORDS_FIELD: &str = "results";
pub const SECTION_NAME: &str = "Bandit";

pub fn extract(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["issue_severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(record, &[&["issue_text"]], "No description");
    let file = fields::first_str(record, &[&["filename"]], "unknown");
    let line = fields::first_display(record, &[&["line_number"]], "?");

    NormalizedFinding::new(&severity, description, "File", file).with_extra("Line", line)
}
