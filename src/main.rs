//! Wallet ledger CLI
//!
//! Replays a CSV script of wallet commands against an in-memory ledger and
//! prints the per-account summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > summary.csv
//! cargo run -- --strategy async script.csv > summary.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 script.csv > summary.csv
//! ```
//!
//! # Processing Strategies
//!
//! - **sync**: Streaming reader, commands applied in file order (default)
//! - **async**: Batch reader, each phone's commands in its own tokio task
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use rust_wallet_ledger::cli;
use rust_wallet_ledger::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    let strategy = {
        let config = if args.strategy == cli::StrategyType::Async {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Summary goes to stdout, diagnostics to stderr
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
