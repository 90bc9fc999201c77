//! Streaming CSV record sink.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::MatchedRecord;
use crate::storage::RecordSink;

/// Output column headers, in row field order.
const HEADER: [&str; 6] = [
    "name",
    "link",
    "code",
    "difficulty",
    "contest name",
    "contest link",
];

/// CSV file sink. Truncates the output file on creation and flushes after
/// every record.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Create the output file, overwriting any existing file, and write the
    /// header row immediately so even an empty run produces a valid file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl RecordSink for CsvSink {
    fn write(&mut self, record: &MatchedRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}
