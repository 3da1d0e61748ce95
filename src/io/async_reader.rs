//! Asynchronous CSV reader
//!
//! Reads a replay script in fixed-size batches for the async strategy.
//! Malformed rows are reported to stderr and left out of the batch.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CommandRecord, WalletError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Batch reader over any `futures` async byte source
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
        }
    }

    /// Read up to `batch_size` valid commands
    ///
    /// An empty batch means the script is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<CommandRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let item = match records.next().await {
                Some(item) => item,
                None => break,
            };
            self.line_num += 1;

            let line = Some(self.line_num);
            match item {
                Ok(csv_record) => match convert_csv_record(csv_record) {
                    Ok(command_record) => batch.push(command_record),
                    Err(e) => eprintln!("{}", WalletError::malformed_record(line, e)),
                },
                Err(e) => eprintln!(
                    "{}",
                    WalletError::malformed_record(line, format!("CSV parse error: {}", e))
                ),
            }
        }

        batch
    }
}
