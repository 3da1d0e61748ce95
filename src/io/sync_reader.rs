//! Synchronous CSV reader
//!
//! Streams a replay script one command at a time. Each item is either a
//! decoded [`CommandRecord`] or a `MalformedRecord` error carrying the line
//! number, so callers can report bad rows and keep going.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CommandRecord, WalletError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over a replay-script file
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Open a script file
    ///
    /// Fields are trimmed and rows may omit trailing columns.
    pub fn new(path: &Path) -> Result<Self, WalletError> {
        let file = File::open(path).map_err(|e| WalletError::Io {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<CommandRecord, WalletError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let item = deserializer.next()?;
        self.line_num += 1;

        Some(match item {
            Ok(csv_record) => convert_csv_record(csv_record)
                .map_err(|e| WalletError::malformed_record(Some(self.line_num), e)),
            Err(e) => Err(WalletError::malformed_record(
                Some(self.line_num),
                format!("CSV parse error: {}", e),
            )),
        })
    }
}
