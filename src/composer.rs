//! Report composition across all scanner pipelines.
//!
//! Pipelines run in a fixed order and are fully isolated: an absent file,
//! an invalid document or a malformed record degrades that scanner's
//! section to a placeholder and never touches the others. Only a failure
//! to write the combined report is fatal.

use crate::config::ReportConfig;
use crate::decoder::{
    Decoded, LineDelimitedDecoder, RawRecord, RecordDecoder, SingleDocumentDecoder,
};
use crate::error::{ReportError, Result};
use crate::extract::{bandit, gitleaks, grype, nuclei, semgrep, trivy};
use crate::findings::NormalizedFinding;
use crate::input::read_document;
use crate::reporter::{PipelineStatus, ReportSection};
use std::fs;
use tracing::{debug, info};

/// Run every scanner pipeline and write the combined report.
pub fn compose_and_write(config: &ReportConfig) -> Result<()> {
    let report = compose(config);
    fs::write(&config.output_path, report).map_err(|source| ReportError::WriteOutput {
        path: config.output_path.display().to_string(),
        source,
    })?;
    info!(path = %config.output_path.display(), "Combined report written");
    Ok(())
}

/// Render all sections in fixed order, separated by one blank line.
pub fn compose(config: &ReportConfig) -> String {
    let sections = [
        single_document_section(
            config,
            bandit::SECTION_NAME,
            bandit::REPORT_FILE,
            bandit::RECORDS_FIELD,
            bandit::extract,
        ),
        single_document_section(
            config,
            semgrep::SECTION_NAME,
            semgrep::REPORT_FILE,
            semgrep::RECORDS_FIELD,
            semgrep::extract,
        ),
        single_document_section(
            config,
            grype::SECTION_NAME,
            grype::REPORT_FILE,
            grype::RECORDS_FIELD,
            grype::extract,
        ),
        trivy_section(config),
        line_delimited_section(
            config,
            gitleaks::SECTION_NAME,
            gitleaks::REPORT_FILE,
            gitleaks::extract,
        ),
        line_delimited_section(
            config,
            nuclei::SECTION_NAME,
            nuclei::REPORT_FILE,
            nuclei::extract,
        ),
    ];
    sections
        .iter()
        .map(ReportSection::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Read and decode one scanner's report file. `None` means absent.
fn decode_input(
    config: &ReportConfig,
    filename: &str,
    decoder: &dyn RecordDecoder,
) -> Option<Decoded> {
    let raw = read_document(&config.input_path(filename))?;
    Some(decoder.decode(&raw))
}

fn run_pipeline(
    config: &ReportConfig,
    filename: &str,
    decoder: &dyn RecordDecoder,
    extract: fn(&RawRecord) -> NormalizedFinding,
) -> PipelineStatus {
    match decode_input(config, filename, decoder) {
        None => PipelineStatus::Absent,
        Some(Decoded::Invalid) => PipelineStatus::Invalid,
        Some(Decoded::Records(records)) => {
            debug!(file = filename, records = records.len(), "Decoded report");
            PipelineStatus::Findings(records.iter().map(extract).collect())
        }
    }
}

fn single_document_section(
    config: &ReportConfig,
    name: &str,
    filename: &str,
    records_field: &'static str,
    extract: fn(&RawRecord) -> NormalizedFinding,
) -> ReportSection {
    let decoder = SingleDocumentDecoder::new(records_field);
    let status = run_pipeline(config, filename, &decoder, extract);
    ReportSection::from_status(name, &status)
}

fn line_delimited_section(
    config: &ReportConfig,
    name: &str,
    filename: &str,
    extract: fn(&RawRecord) -> NormalizedFinding,
) -> ReportSection {
    let status = run_pipeline(config, filename, &LineDelimitedDecoder, extract);
    ReportSection::from_status(name, &status)
}

/// Trivy is the one multi-category pipeline: its decoded entries fan out
/// into vulnerability and secret sub-sections of a single report section.
fn trivy_section(config: &ReportConfig) -> ReportSection {
    let decoder = SingleDocumentDecoder::new(trivy::RECORDS_FIELD);
    match decode_input(config, trivy::REPORT_FILE, &decoder) {
        None => ReportSection::from_status(trivy::SECTION_NAME, &PipelineStatus::Absent),
        Some(Decoded::Invalid) => {
            ReportSection::from_status(trivy::SECTION_NAME, &PipelineStatus::Invalid)
        }
        Some(Decoded::Records(entries)) => {
            let vulnerabilities: Vec<NormalizedFinding> =
                trivy::category_records(&entries, trivy::VULNERABILITIES)
                    .iter()
                    .map(trivy::extract_vulnerability)
                    .collect();
            let secrets: Vec<NormalizedFinding> =
                trivy::category_records(&entries, trivy::SECRETS)
                    .iter()
                    .map(trivy::extract_secret)
                    .collect();
            ReportSection::from_subsections(
                trivy::SECTION_NAME,
                &[
                    (trivy::VULNERABILITIES, vulnerabilities),
                    (trivy::SECRETS, secrets),
                ],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_report(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_compose_all_absent_yields_six_placeholder_sections() {
        let dir = TempDir::new().unwrap();
        let report = compose(&ReportConfig::for_dir(dir.path()));

        let sections: Vec<&str> = report.split("\n\n").collect();
        assert_eq!(sections.len(), 6);
        for section in &sections {
            assert!(section.ends_with("Report not found."), "{}", section);
        }
    }

    #[test]
    fn test_compose_fixed_section_order() {
        let dir = TempDir::new().unwrap();
        let report = compose(&ReportConfig::for_dir(dir.path()));

        let titles: Vec<usize> = [
            "=== Bandit Report ===",
            "=== Semgrep Report ===",
            "=== Grype Report ===",
            "=== Trivy Report ===",
            "=== Gitleaks Report ===",
            "=== Nuclei Report ===",
        ]
        .iter()
        .map(|title| report.find(title).unwrap())
        .collect();
        assert!(titles.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_compose_one_bad_pipeline_does_not_poison_others() {
        let dir = TempDir::new().unwrap();
        write_report(&dir, "bandit-report.json", "{broken json");
        write_report(
            &dir,
            "nuclei-report.json",
            "{\"info\": {\"name\": \"T\", \"severity\": \"low\"}, \"matched-at\": \"http://x\"}\n",
        );
        let report = compose(&ReportConfig::for_dir(dir.path()));

        assert!(report.contains("=== Bandit Report ===\nNo issues found or invalid format."));
        assert!(report.contains("[LOW] T (Target: http://x)"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let dir = TempDir::new().unwrap();
        write_report(
            &dir,
            "bandit-report.json",
            r#"{"results": [{"issue_severity": "HIGH", "issue_text": "X", "filename": "a.py", "line_number": 10}]}"#,
        );
        let config = ReportConfig::for_dir(dir.path());
        assert_eq!(compose(&config), compose(&config));
    }

    #[test]
    fn test_compose_and_write_creates_output_file() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig::for_dir(dir.path());
        compose_and_write(&config).unwrap();

        let written = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(written, compose(&config));
    }

    #[test]
    fn test_compose_and_write_fails_on_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let mut config = ReportConfig::for_dir(dir.path());
        config.output_path = dir.path().join("missing-subdir").join("out.txt");

        let err = compose_and_write(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write report to"));
    }
}
