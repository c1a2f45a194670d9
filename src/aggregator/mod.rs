//! Severity tallies and summary rendering.

use crate::findings::NormalizedFinding;

/// Known severity labels, highest urgency first. Labels outside this list
/// sort after all known ones, in first-seen order.
const PRIORITY: [&str; 6] = [
    "CRITICAL",
    "HIGH",
    "MEDIUM",
    "LOW",
    "NEGLIGIBLE",
    "UNKNOWN",
];

fn priority_rank(label: &str) -> usize {
    PRIORITY
        .iter()
        .position(|known| *known == label)
        .unwrap_or(PRIORITY.len())
}

/// Count of findings per severity label for one scanner or category.
///
/// Insertion order is kept so labels outside the known vocabulary render
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityTally {
    counts: Vec<(String, usize)>,
}

impl SeverityTally {
    /// Fold a tally over one pipeline's findings.
    pub fn from_findings(findings: &[NormalizedFinding]) -> Self {
        let mut tally = Self::default();
        for finding in findings {
            tally.add(&finding.severity);
        }
        tally
    }

    fn add(&mut self, label: &str) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(seen, _)| seen == label) {
            *count += 1;
        } else {
            self.counts.push((label.to_string(), 1));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Render the summary as `"<LABEL>: <count>"` pairs joined by `", "`,
    /// in priority order. `None` when there is nothing to count, so
    /// callers never render a bare label list.
    pub fn render(&self) -> Option<String> {
        if self.counts.is_empty() {
            return None;
        }
        let mut order: Vec<usize> = (0..self.counts.len()).collect();
        order.sort_by_key(|&i| (priority_rank(&self.counts[i].0), i));
        Some(
            order
                .iter()
                .map(|&i| format!("{}: {}", self.counts[i].0, self.counts[i].1))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: &str) -> NormalizedFinding {
        NormalizedFinding::new(severity, "X".to_string(), "File", "a.py".to_string())
    }

    #[test]
    fn test_render_priority_order_and_case_folding() {
        let findings = vec![
            finding("HIGH"),
            finding("high"),
            finding("CRITICAL"),
            finding("LOW"),
            finding("LOW"),
        ];
        let tally = SeverityTally::from_findings(&findings);
        assert_eq!(tally.render().unwrap(), "CRITICAL: 1, HIGH: 2, LOW: 2");
    }

    #[test]
    fn test_render_empty_tally_is_none() {
        let tally = SeverityTally::from_findings(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.render(), None);
    }

    #[test]
    fn test_unknown_sorts_after_known_labels() {
        let findings = vec![finding("unknown"), finding("NEGLIGIBLE"), finding("LOW")];
        let tally = SeverityTally::from_findings(&findings);
        assert_eq!(
            tally.render().unwrap(),
            "LOW: 1, NEGLIGIBLE: 1, UNKNOWN: 1"
        );
    }

    #[test]
    fn test_unrecognized_labels_keep_first_seen_order() {
        let findings = vec![
            finding("WEIRD"),
            finding("HIGH"),
            finding("ODD"),
            finding("WEIRD"),
        ];
        let tally = SeverityTally::from_findings(&findings);
        assert_eq!(tally.render().unwrap(), "HIGH: 1, WEIRD: 2, ODD: 1");
    }

    #[test]
    fn test_single_severity() {
        let tally = SeverityTally::from_findings(&[finding("MEDIUM")]);
        assert_eq!(tally.render().unwrap(), "MEDIUM: 1");
    }
}
