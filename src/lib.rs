//! Rust Wallet Ledger Library
//! # Overview
//!
//! This library provides an in-memory wallet ledger: accounts identified by
//! phone, balance deposits, payments that can be rejected or repeated, and
//! named favorite payments. A CSV replay tool drives the ledger with either a
//! sync or an async strategy.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Payment, Favorite, Command, WalletError)
//! - [`core`] - Business logic components:
//!   - [`core::service`] - The ledger operation surface
//!   - [`core::account_manager`] - Account state, phone index and balance arithmetic
//!   - [`core::payment_store`] / [`core::favorite_store`] - Payment and favorite records
//!   - [`core::engine`] - Replay command processing
//!   - [`core::r#async`] - Lock-guarded ledger and batch processing
//! - [`io`] - CSV script parsing and summary output
//! - [`strategy`] - Complete replay pipelines
//! - [`cli`] - CLI arguments parsing
//!
//! # Operations
//!
//! - **RegisterAccount**: create an account for a new phone
//! - **Deposit**: credit a positive amount
//! - **Pay**: debit a positive amount covered by the balance, recording a payment
//! - **Reject**: mark a payment failed and refund it
//! - **Repeat**: pay again with the terms of an existing payment
//! - **FavoritePayment** / **PayFromFavorite**: save payment terms under a name and reuse them
//!
//! # Example
//!
//! ```
//! use rust_wallet_ledger::{PaymentStatus, Service};
//!
//! let mut service = Service::new();
//! let account_id = service.register_account("+992927894561").unwrap().id;
//! service.deposit(account_id, 100_000).unwrap();
//!
//! let payment_id = service.pay(account_id, 8, "auto").unwrap().id.clone();
//! assert_eq!(service.find_account_by_id(account_id).unwrap().balance, 99_992);
//!
//! service.reject(&payment_id).unwrap();
//! assert_eq!(service.find_payment_by_id(&payment_id).unwrap().status, PaymentStatus::Fail);
//! assert_eq!(service.find_account_by_id(account_id).unwrap().balance, 100_000);
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{CommandEngine, Ledger, Service, SharedService};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountId, Command, CommandRecord, Favorite, FavoriteId, Money, Payment, PaymentId,
    PaymentStatus, WalletError,
};
