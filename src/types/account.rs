//! Account-related types for the wallet ledger
//!
//! This module defines the Account structure together with the scalar
//! aliases (money, identifiers, phone) shared by the rest of the crate.

use serde::{Deserialize, Serialize};

/// Amount of money in the smallest currency unit
///
/// Signed so that balances are representable even when an embedding
/// application bypasses the payment path; the ledger itself never lets a
/// payment drive a balance below zero.
pub type Money = i64;

/// Account identifier
///
/// Assigned sequentially starting at 1. Identifiers are never reused.
pub type AccountId = i64;

/// Phone number identifying the account holder
///
/// Treated as an opaque string; two accounts can never share a phone.
pub type Phone = String;

/// Wallet account state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequential account identifier
    pub id: AccountId,

    /// Unique phone of the account holder
    pub phone: Phone,

    /// Current balance
    ///
    /// Increased by deposits and rejected payments, decreased by payments.
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned by the account manager
    /// * `phone` - The phone of the account holder
    pub fn new(id: AccountId, phone: impl Into<Phone>) -> Self {
        Account {
            id,
            phone: phone.into(),
            balance: 0,
        }
    }
}
