//! I/O module
//!
//! Handles replay-script parsing and summary output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, summary serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, summarize, write_accounts_csv, AccountSummary, CsvRecord};
pub use sync_reader::SyncReader;
