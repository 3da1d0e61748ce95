//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and the money/identifier aliases
//! - `payment`: Payments and their lifecycle status
//! - `favorite`: Favorite payment templates
//! - `command`: Replay script commands
//! - `error`: Error types for the wallet ledger

pub mod account;
pub mod command;
pub mod error;
pub mod favorite;
pub mod payment;

pub use account::{Account, AccountId, Money, Phone};
pub use command::{Command, CommandRecord, Reference};
pub use error::WalletError;
pub use favorite::{Favorite, FavoriteId};
pub use payment::{new_record_id, Payment, PaymentCategory, PaymentId, PaymentStatus};
