//! Format decoders for raw scanner documents.
//!
//! A decoder turns the text of one report file into a sequence of raw,
//! loosely-typed records. The dynamic representation stops here: field
//! extractors convert every record into a strongly-typed finding.

mod lines;
mod single;

pub use lines::LineDelimitedDecoder;
pub use single::SingleDocumentDecoder;

use serde_json::Value;

/// One scanner-native finding record, still loosely typed.
pub type RawRecord = Value;

/// Outcome of decoding one raw document.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The document yielded a sequence of raw records, possibly empty.
    Records(Vec<RawRecord>),
    /// The document exists but its top-level structure is not the
    /// expected shape. Recovered by the caller as a placeholder section.
    Invalid,
}

/// Capability of producing raw records from one raw document.
pub trait RecordDecoder {
    fn decode(&self, raw: &str) -> Decoded;
}
