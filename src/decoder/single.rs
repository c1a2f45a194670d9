//! Decoder for reports shipped as one JSON document.

use super::{Decoded, RecordDecoder};
use serde_json::Value;
use tracing::warn;

/// Decodes a whole-file JSON document whose findings live in an array
/// under a tool-specific top-level field (`results`, `matches`, `Results`).
pub struct SingleDocumentDecoder {
    records_field: &'static str,
}

impl SingleDocumentDecoder {
    pub fn new(records_field: &'static str) -> Self {
        Self { records_field }
    }
}

impl RecordDecoder for SingleDocumentDecoder {
    fn decode(&self, raw: &str) -> Decoded {
        let doc: Value = match serde_json::from_str(raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Report is not valid JSON");
                return Decoded::Invalid;
            }
        };

        match doc.get(self.records_field).and_then(Value::as_array) {
            Some(records) => Decoded::Records(records.clone()),
            None => {
                warn!(
                    field = self.records_field,
                    "Report is missing its records array"
                );
                Decoded::Invalid
            }
        }
    }
}
