//! Batch processing for concurrent command replay
//!
//! This module provides the `BatchProcessor` which processes batches of
//! commands concurrently while maintaining per-phone ordering.
//!
//! # Design
//!
//! The batch processor follows a partition-and-parallelize approach:
//!
//! 1. **Partition**: split the batch by phone
//! 2. **Parallelize**: spawn one tokio task per phone
//! 3. **Sequential per phone**: within a task commands run in file order
//! 4. **Collect**: gather the per-command results from every task
//!
//! ```text
//! Batch
//!   ├── "+1": [register, deposit, pay]  → Task 1 (sequential)
//!   ├── "+2": [register, pay]           → Task 2 (sequential)
//!   └── "+3": [register, deposit]       → Task 3 (sequential)
//! ```
//!
//! Commands of one phone never race each other, so a phone's balance evolves
//! exactly as it would in a sequential replay. A label bound by one phone and
//! used by another in the same batch may not be bound yet when it is looked up.

use std::collections::HashMap;

use super::AsyncCommandEngine;
use crate::types::{CommandRecord, Phone, WalletError};

/// Outcome of applying one command
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The command that was applied
    pub record: CommandRecord,

    /// Success, or the error the command failed with
    pub result: Result<(), WalletError>,
}

/// Concurrent batch processor partitioned by phone
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    engine: AsyncCommandEngine,
}

impl BatchProcessor {
    pub fn new(engine: AsyncCommandEngine) -> Self {
        Self { engine }
    }

    /// Split a batch into per-phone command lists, preserving file order
    pub fn partition_by_phone(&self, batch: Vec<CommandRecord>) -> HashMap<Phone, Vec<CommandRecord>> {
        let mut phone_batches: HashMap<Phone, Vec<CommandRecord>> = HashMap::new();

        for record in batch {
            phone_batches
                .entry(record.phone.clone())
                .or_default()
                .push(record);
        }

        phone_batches
    }

    /// Apply one phone's commands in order
    ///
    /// A failing command is reported to stderr and does not stop the ones
    /// after it.
    pub async fn process_phone_commands(&self, commands: Vec<CommandRecord>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(commands.len());

        for record in commands {
            let result = self.engine.process_command(record.clone());
            if let Err(e) = &result {
                eprintln!("Error processing {} for {}: {}", record.command.op(), record.phone, e);
            }
            results.push(ProcessingResult { record, result });
        }

        results
    }

    /// Process a whole batch, one task per phone
    ///
    /// Returns once every task has finished. Results are grouped by phone;
    /// there is no ordering between phones.
    pub async fn process_batch(&self, batch: Vec<CommandRecord>) -> Vec<ProcessingResult> {
        let phone_batches = self.partition_by_phone(batch);

        let mut tasks = Vec::with_capacity(phone_batches.len());
        for (_phone, commands) in phone_batches {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_phone_commands(commands).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(phone_results) => results.extend(phone_results),
                Err(e) => {
                    eprintln!("Task panicked: {:?}", e);
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::r#async::SharedService;
    use crate::types::Command;

    fn record(phone: &str, command: Command) -> CommandRecord {
        CommandRecord {
            phone: phone.to_string(),
            command,
        }
    }

    fn processor() -> BatchProcessor {
        BatchProcessor::new(AsyncCommandEngine::new(SharedService::new()))
    }

    #[test]
    fn test_partition_by_phone_empty_batch() {
        let partitioned = processor().partition_by_phone(vec![]);

        assert!(partitioned.is_empty());
    }

    #[test]
    fn test_partition_by_phone_preserves_order() {
        let batch = vec![
            record("+1", Command::Register),
            record("+2", Command::Register),
            record("+1", Command::Deposit { amount: 10 }),
            record("+2", Command::Deposit { amount: 20 }),
            record("+1", Command::Deposit { amount: 30 }),
        ];

        let partitioned = processor().partition_by_phone(batch);

        assert_eq!(partitioned.len(), 2);
        let first: Vec<&str> = partitioned["+1"].iter().map(|r| r.command.op()).collect();
        assert_eq!(first, vec!["register", "deposit", "deposit"]);
        assert_eq!(
            partitioned["+1"][2].command,
            Command::Deposit { amount: 30 }
        );
        assert_eq!(partitioned["+2"].len(), 2);
    }

    #[tokio::test]
    async fn test_process_batch_collects_every_result() {
        let processor = processor();
        let batch = vec![
            record("+1", Command::Register),
            record("+1", Command::Deposit { amount: 100 }),
            record("+2", Command::Register),
            record("+2", Command::Deposit { amount: -5 }),
            record("+3", Command::Deposit { amount: 5 }),
        ];

        let results = processor.process_batch(batch).await;

        assert_eq!(results.len(), 5);
        let failures: Vec<_> = results
            .iter()
            .filter_map(|r| r.result.clone().err())
            .collect();
        assert_eq!(failures.len(), 2);
        assert!(failures.contains(&WalletError::amount_must_be_positive(-5)));
        assert!(failures.contains(&WalletError::account_not_found("+3")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_process_batch_keeps_per_phone_order() {
        let engine = AsyncCommandEngine::new(SharedService::new());
        let processor = BatchProcessor::new(engine.clone());
        let mut batch = Vec::new();
        for i in 0..20 {
            let phone = format!("+{}", i);
            batch.push(record(&phone, Command::Register));
            batch.push(record(&phone, Command::Deposit { amount: 10 }));
            batch.push(record(
                &phone,
                Command::Pay {
                    amount: 10,
                    category: "auto".to_string(),
                    reference: None,
                },
            ));
        }

        let results = processor.process_batch(batch).await;

        assert!(results.iter().all(|r| r.result.is_ok()));
        let accounts = engine.get_accounts();
        assert_eq!(accounts.len(), 20);
        assert!(accounts.iter().all(|a| a.balance == 0));
        assert_eq!(engine.get_payments().len(), 20);
    }

    #[tokio::test]
    async fn test_labels_carry_across_batches() {
        let engine = AsyncCommandEngine::new(SharedService::new());
        let processor = BatchProcessor::new(engine.clone());

        processor
            .process_batch(vec![
                record("+1", Command::Register),
                record("+1", Command::Deposit { amount: 50 }),
                record(
                    "+1",
                    Command::Pay {
                        amount: 20,
                        category: "food".to_string(),
                        reference: Some("p1".to_string()),
                    },
                ),
            ])
            .await;
        let results = processor
            .process_batch(vec![record(
                "+1",
                Command::Reject {
                    target: "p1".to_string(),
                },
            )])
            .await;

        assert!(results[0].result.is_ok());
        assert_eq!(engine.get_accounts()[0].balance, 50);
    }
}
