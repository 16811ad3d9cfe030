use crate::formatter::Formatter;
use crate::record::Record;
use crate::ser::{DetailEntry, SimpleEntry};

/// Formats a record as a single-line JSON object with the message, level and
/// date. Attributes are dropped.
///
/// ```json
/// {"message":"message","level":"WARN","date":"2023-12-31"}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleStructure;

impl Formatter for SimpleStructure {
    type Error = serde_json::Error;

    fn fmt(&self, record: &Record) -> Result<String, serde_json::Error> {
        serde_json::to_string(&SimpleEntry(record))
    }
}

/// Formats a record as a single-line JSON object with the message, level,
/// thread, every attribute as its own key, and the full timestamp.
///
/// ```json
/// {"message":{"name":"range error"},"level":"INFO","thread":"main","attr":"attributes","date":"2023-12-31T12:34:56"}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailStructure;

impl Formatter for DetailStructure {
    type Error = serde_json::Error;

    fn fmt(&self, record: &Record) -> Result<String, serde_json::Error> {
        serde_json::to_string(&DetailEntry(record))
    }
}
