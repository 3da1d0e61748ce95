//! Payment-related types for the wallet ledger
//!
//! This module defines payments, their lifecycle status, and the identifiers
//! used to address them.

use super::account::{AccountId, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Payment identifier
///
/// A random UUIDv4 rendered as hyphenated text.
pub type PaymentId = String;

/// Free-form payment category label (e.g. "auto", "food")
pub type PaymentCategory = String;

/// Generate a fresh, collision-resistant record identifier
///
/// Shared by payments and favorites.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Lifecycle status of a payment
///
/// Payments start `InProgress` and move to `Fail` when rejected. `Ok` exists
/// as a status value but no ledger operation assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Settled successfully
    #[serde(rename = "OK")]
    Ok,

    /// Rejected; the amount was refunded to the account
    #[serde(rename = "Fail")]
    Fail,

    /// Debited and awaiting settlement
    #[serde(rename = "INPROGRESS")]
    InProgress,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ok => "OK",
            PaymentStatus::Fail => "Fail",
            PaymentStatus::InProgress => "INPROGRESS",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A debit against an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier
    pub id: PaymentId,

    /// The account that was debited
    pub account_id: AccountId,

    /// Debited amount (always positive)
    pub amount: Money,

    /// Category label supplied by the caller
    pub category: PaymentCategory,

    /// Current lifecycle status
    pub status: PaymentStatus,
}

impl Payment {
    /// Create a new in-progress payment with a freshly generated identifier
    pub fn new(account_id: AccountId, amount: Money, category: impl Into<PaymentCategory>) -> Self {
        Payment {
            id: new_record_id(),
            account_id,
            amount,
            category: category.into(),
            status: PaymentStatus::InProgress,
        }
    }

    /// Whether this payment has been rejected
    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Fail
    }

    /// The (account, amount, category) triple shared with favorites
    ///
    /// Two payments with the same terms are interchangeable apart from their
    /// identity and status.
    pub fn terms(&self) -> (AccountId, Money, &str) {
        (self.account_id, self.amount, &self.category)
    }
}
