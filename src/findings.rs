//! Normalized findings shared by every scanner pipeline.

use serde::{Deserialize, Serialize};

/// Severity label used when a scanner does not report one.
pub const UNKNOWN_SEVERITY: &str = "UNKNOWN";

/// One scanner finding after field extraction.
///
/// `locator` is the scanner-specific "where" of the finding (file, package,
/// target) as a labeled pair; `extra` carries optional labeled context such
/// as line numbers, fix state or commit hashes, in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFinding {
    pub severity: String,
    pub description: String,
    pub locator: (String, String),
    pub extra: Vec<(String, String)>,
}

impl NormalizedFinding {
    /// Build a finding, normalizing the severity label.
    ///
    /// Severity is upper-cased at this boundary so tallies and renderers
    /// see one casing per label; a blank label becomes `UNKNOWN`.
    pub fn new(
        severity: &str,
        description: String,
        locator_label: &str,
        locator_value: String,
    ) -> Self {
        let trimmed = severity.trim();
        let severity = if trimmed.is_empty() {
            UNKNOWN_SEVERITY.to_string()
        } else {
            trimmed.to_uppercase()
        };
        Self {
            severity,
            description,
            locator: (locator_label.to_string(), locator_value),
            extra: Vec::new(),
        }
    }

    /// Append one labeled context pair.
    pub fn with_extra(mut self, label: &str, value: impl Into<String>) -> Self {
        self.extra.push((label.to_string(), value.into()));
        self
    }

    /// Render the finding as one report line:
    /// `[<severity>] <description> (<Label>: <value>, ...)`.
    pub fn render_line(&self) -> String {
        let mut context = vec![format!("{}: {}", self.locator.0, self.locator.1)];
        context.extend(
            self.extra
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value)),
        );
        format!(
            "[{}] {} ({})",
            self.severity,
            self.description,
            context.join(", ")
        )
    }
}
