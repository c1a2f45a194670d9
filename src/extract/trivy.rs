//! Trivy image-scan findings, split into vulnerability and secret
//! categories.
//!
//! A trivy report is one JSON document whose `Results` array holds one
//! entry per scanned target; each entry carries its own `Vulnerabilities`
//! and `Secrets` arrays. The flattening below happens at the decode
//! boundary so the extractors stay pure record-to-finding mappings.

use super::fields;
use crate::decoder::RawRecord;
use crate::findings::{NormalizedFinding, UNKNOWN_SEVERITY};
use serde_json::Value;

pub const REPORT_FILE: &str = "trivy-report.json";
pub const RECORDS_FIELD: &str = "Results";
pub const SECTION_NAME: &str = "Trivy";

pub const VULNERABILITIES: &str = "Vulnerabilities";
pub const SECRETS: &str = "Secrets";

/// Flatten one category array out of the per-target result entries.
///
/// Secret records carry no location of their own, so the parent entry's
/// `Target` is stamped onto each record that lacks one.
pub fn category_records(entries: &[RawRecord], category: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for entry in entries {
        let target = entry.get("Target").and_then(Value::as_str);
        let Some(items) = entry.get(category).and_then(Value::as_array) else {
            continue;
        };
        for item in items {
            let mut record = item.clone();
            if let (Some(target), Some(obj)) = (target, record.as_object_mut()) {
                obj.entry("Target")
                    .or_insert_with(|| Value::String(target.to_string()));
            }
            records.push(record);
        }
    }
    records
}

pub fn extract_vulnerability(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["Severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(
        record,
        &[&["Title"], &["VulnerabilityID"]],
        "No description",
    );
    let package = fields::first_str(record, &[&["PkgName"]], "unknown");

    let mut finding = NormalizedFinding::new(&severity, description, "Package", package);
    if let Some(installed) = fields::opt_display(record, &[&["InstalledVersion"]]) {
        finding = finding.with_extra("Installed", installed);
    }
    if let Some(fixed) = fields::opt_display(record, &[&["FixedVersion"]]) {
        finding = finding.with_extra("Fixed", fixed);
    }
    finding
}

pub fn extract_secret(record: &RawRecord) -> NormalizedFinding {
    let severity = fields::first_str(record, &[&["Severity"]], UNKNOWN_SEVERITY);
    let description = fields::first_str(record, &[&["Title"], &["RuleID"]], "Secret detected");
    let target = fields::first_str(record, &[&["Target"]], "unknown");

    let mut finding = NormalizedFinding::new(&severity, description, "Target", target);
    if let Some(line) = fields::opt_display(record, &[&["StartLine"]]) {
        finding = finding.with_extra("Line", line);
    }
    finding
}
