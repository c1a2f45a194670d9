//! Decoder for newline-delimited JSON reports.

use super::{Decoded, RecordDecoder};
use serde_json::Value;
use tracing::warn;

/// Decodes a file where each non-blank line is one independent JSON
/// record.
///
/// These files are often streamed or appended by the producing tool, so a
/// malformed line (e.g. a truncated final write) is skipped and decoding
/// continues with the remaining lines. Consequently this decoder never
/// reports an invalid document: the worst case is zero records.
pub struct LineDelimitedDecoder;

impl RecordDecoder for LineDelimitedDecoder {
    fn decode(&self, raw: &str) -> Decoded {
        let mut records = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = idx + 1, error = %e, "Skipping malformed record line");
                }
            }
        }
        Decoded::Records(records)
    }
}
