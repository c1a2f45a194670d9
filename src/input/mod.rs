//! Source reading for scanner report files.

use std::fs;
use std::path::Path;
use tracing::warn;

/// Read one scanner report file.
///
/// A missing or unreadable file is not an error: downstream pipelines must
/// treat it exactly like a scanner that produced nothing, so absence is
/// signalled as `None` and the cause is only logged.
pub fn read_document(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Scanner report unavailable");
            None
        }
    }
}
