//! Output sinks for matched records.

pub mod csv;

pub use self::csv::CsvSink;

use crate::error::Result;
use crate::models::MatchedRecord;

/// Append-only sink for matched records.
///
/// Call order defines output row order. Implementations must persist each
/// record incrementally so rows written before a mid-crawl failure remain
/// durable.
pub trait RecordSink {
    /// Append one record.
    fn write(&mut self, record: &MatchedRecord) -> Result<()>;
}
