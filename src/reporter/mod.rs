//! Report sections and their text rendering.

use crate::aggregator::SeverityTally;
use crate::findings::NormalizedFinding;

/// Placeholder for a scanner whose report file was absent.
pub const NOT_FOUND: &str = "Report not found.";
/// Placeholder for an unusable or finding-free report.
pub const NO_ISSUES: &str = "No issues found or invalid format.";

/// Outcome of one scanner pipeline, before rendering.
///
/// The composer pattern-matches on this instead of catching errors: every
/// degraded case is an ordinary value with a section of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineStatus {
    /// The report decoded; the finding list may still be empty.
    Findings(Vec<NormalizedFinding>),
    /// The report file was absent or unreadable.
    Absent,
    /// The report file existed but its top-level shape was wrong.
    Invalid,
}

/// One titled block of the final report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub summary_line: Option<String>,
    pub body_lines: Vec<String>,
}

impl ReportSection {
    /// Build a section from one pipeline's outcome.
    ///
    /// Findings keep their input order; they are never sorted by severity.
    pub fn from_status(name: &str, status: &PipelineStatus) -> Self {
        match status {
            PipelineStatus::Absent => Self::placeholder(name, NOT_FOUND),
            PipelineStatus::Invalid => Self::placeholder(name, NO_ISSUES),
            PipelineStatus::Findings(findings) if findings.is_empty() => {
                Self::placeholder(name, NO_ISSUES)
            }
            PipelineStatus::Findings(findings) => {
                let tally = SeverityTally::from_findings(findings);
                Self {
                    title: section_title(name),
                    summary_line: tally
                        .render()
                        .map(|line| format!("Severity summary: {}", line)),
                    body_lines: findings
                        .iter()
                        .map(NormalizedFinding::render_line)
                        .collect(),
                }
            }
        }
    }

    /// Build a section with labeled sub-category blocks. Image scanners
    /// report vulnerabilities and secrets separately under one tool, so
    /// each block gets its own summary and placeholder handling while the
    /// scanner still contributes exactly one section.
    pub fn from_subsections(name: &str, subsections: &[(&str, Vec<NormalizedFinding>)]) -> Self {
        let mut body_lines = Vec::new();
        for (label, findings) in subsections {
            body_lines.push(format!("-- {} --", label));
            if findings.is_empty() {
                body_lines.push(NO_ISSUES.to_string());
                continue;
            }
            let tally = SeverityTally::from_findings(findings);
            if let Some(summary) = tally.render() {
                body_lines.push(format!("Severity summary: {}", summary));
            }
            body_lines.extend(findings.iter().map(NormalizedFinding::render_line));
        }
        Self {
            title: section_title(name),
            summary_line: None,
            body_lines,
        }
    }

    fn placeholder(name: &str, text: &str) -> Self {
        Self {
            title: section_title(name),
            summary_line: None,
            body_lines: vec![text.to_string()],
        }
    }

    /// Render the section as report text.
    pub fn render(&self) -> String {
        let mut lines = vec![self.title.clone()];
        if let Some(summary) = &self.summary_line {
            lines.push(summary.clone());
        }
        lines.extend(self.body_lines.iter().cloned());
        lines.join("\n")
    }
}

fn section_title(name: &str) -> String {
    format!("=== {} Report ===", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: &str, description: &str) -> NormalizedFinding {
        NormalizedFinding::new(
            severity,
            description.to_string(),
            "File",
            "a.py".to_string(),
        )
    }

    #[test]
    fn test_absent_renders_not_found() {
        let section = ReportSection::from_status("Bandit", &PipelineStatus::Absent);
        assert_eq!(section.render(), "=== Bandit Report ===\nReport not found.");
    }

    #[test]
    fn test_invalid_renders_no_issues() {
        let section = ReportSection::from_status("Semgrep", &PipelineStatus::Invalid);
        assert_eq!(
            section.render(),
            "=== Semgrep Report ===\nNo issues found or invalid format."
        );
    }

    #[test]
    fn test_zero_findings_renders_no_issues() {
        let section =
            ReportSection::from_status("Grype", &PipelineStatus::Findings(Vec::new()));
        assert_eq!(
            section.render(),
            "=== Grype Report ===\nNo issues found or invalid format."
        );
    }

    #[test]
    fn test_findings_render_in_input_order() {
        let status = PipelineStatus::Findings(vec![
            finding("LOW", "first"),
            finding("CRITICAL", "second"),
            finding("HIGH", "third"),
        ]);
        let section = ReportSection::from_status("Bandit", &status);

        // Input order preserved, not severity order.
        assert_eq!(section.body_lines[0], "[LOW] first (File: a.py)");
        assert_eq!(section.body_lines[1], "[CRITICAL] second (File: a.py)");
        assert_eq!(section.body_lines[2], "[HIGH] third (File: a.py)");
        assert_eq!(
            section.summary_line.as_deref(),
            Some("Severity summary: CRITICAL: 1, HIGH: 1, LOW: 1")
        );
    }

    #[test]
    fn test_subsections_each_get_summary_or_placeholder() {
        let section = ReportSection::from_subsections(
            "Trivy",
            &[
                ("Vulnerabilities", vec![finding("HIGH", "CVE-1")]),
                ("Secrets", Vec::new()),
            ],
        );
        assert_eq!(
            section.render(),
            "=== Trivy Report ===\n\
             -- Vulnerabilities --\n\
             Severity summary: HIGH: 1\n\
             [HIGH] CVE-1 (File: a.py)\n\
             -- Secrets --\n\
             No issues found or invalid format."
        );
    }

    #[test]
    fn test_render_has_no_blank_lines_inside_section() {
        let status = PipelineStatus::Findings(vec![finding("HIGH", "X")]);
        let section = ReportSection::from_status("Bandit", &status);
        assert!(!section.render().contains("\n\n"));
    }
}
