//! Synchronous replay strategy
//!
//! Streams the script with [`SyncReader`] and applies every command to one
//! [`CommandEngine`] strictly in file order.

use crate::core::CommandEngine;
use crate::io::csv_format::write_accounts_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use std::io::Write;
use std::path::Path;

/// Single-threaded, in-order replay
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let mut engine = CommandEngine::new();

        let reader = SyncReader::new(input_path).map_err(|e| e.to_string())?;

        for result in reader {
            match result {
                Ok(record) => {
                    let op = record.command.op();
                    let phone = record.phone.clone();
                    if let Err(e) = engine.process(record) {
                        eprintln!("Error processing {} for {}: {}", op, phone, e);
                    }
                }
                Err(e) => {
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        write_accounts_csv(&engine.get_accounts(), &engine.get_payments(), output)?;

        Ok(())
    }
}
