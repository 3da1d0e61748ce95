use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the wallet ledger replay tool
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Replay wallet commands and print the account summary", long_about = None)]
pub struct CliArgs {
    /// Path to the input CSV script
    #[arg(value_name = "INPUT", help = "Path to the input CSV script")]
    pub input_file: PathBuf,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for in-order replay or 'async' for per-phone tasks"
    )]
    pub strategy: StrategyType,

    /// Number of commands per batch (async only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of commands per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads for the async strategy (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    /// Streaming reader, commands applied strictly in file order
    Sync,
    /// Batch reader, commands partitioned by phone across tokio tasks
    Async,
}

impl CliArgs {
    /// Build the async batch configuration from the optional flags
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["wallet-ledger", "script.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["wallet-ledger", "--strategy", "sync", "script.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["wallet-ledger", "--strategy", "async", "script.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(parsed.strategy, expected);
        assert_eq!(parsed.input_file, PathBuf::from("script.csv"));
    }

    #[rstest]
    #[case::batch_size(&["wallet-ledger", "--batch-size", "2000", "script.csv"], Some(2000), None)]
    #[case::max_concurrent(&["wallet-ledger", "--max-concurrent", "8", "script.csv"], None, Some(8))]
    #[case::no_options(&["wallet-ledger", "script.csv"], None, None)]
    #[case::all_options(
        &["wallet-ledger", "--strategy", "async", "--batch-size", "2000", "--max-concurrent", "8", "script.csv"],
        Some(2000),
        Some(8)
    )]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] max_concurrent: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.max_concurrent_batches, max_concurrent);
    }

    #[rstest]
    #[case::all_defaults(&["wallet-ledger", "script.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["wallet-ledger", "--batch-size", "2000", "script.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["wallet-ledger", "--max-concurrent", "8", "script.csv"], 1000, 8)]
    #[case::zero_batch_size(&["wallet-ledger", "--batch-size", "0", "script.csv"], 1000, num_cpus::get())]
    #[case::zero_max_concurrent(&["wallet-ledger", "--max-concurrent", "0", "script.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[rstest]
    #[case::missing_input(&["wallet-ledger"])]
    #[case::invalid_strategy(&["wallet-ledger", "--strategy", "parallel", "script.csv"])]
    #[case::negative_batch_size(&["wallet-ledger", "--batch-size", "-1", "script.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
