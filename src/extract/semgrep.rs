//! Semgrep semantic-pattern findings.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};

pub const REPORT_FILE: &str = "semgrep-report.json";
pub const RECORDS_FIELD: &str = "results";
pub const SECTION_NAME: &str = "Semgrep";

pub fn extract(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["extra", "severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(record, &[&["extra", "message"]], "No message");
    let path = fields::first_str(record, &[&["path"]], "unknown");
    let line = fields::first_display(record, &[&["start", "line"]], "?");

    NormalizedFinding::new(&severity, description, "File", path).with_extra("Line", line)
}
