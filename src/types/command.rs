//! Replay commands
//!
//! A replay script is a sequence of commands, each addressed to the account
//! owning a phone. Payments and favorites created by a command can be bound
//! to a script-local label (`reference`) and later addressed by that label
//! (`target`), since their real identifiers are generated at run time.

use super::account::{Money, Phone};
use super::payment::PaymentCategory;

/// Script-local label bound to a generated payment or favorite identifier
pub type Reference = String;

/// A single ledger operation decoded from a replay script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new account for the phone
    Register,

    /// Credit the account
    Deposit { amount: Money },

    /// Debit the account, optionally binding the new payment to a label
    Pay {
        amount: Money,
        category: PaymentCategory,
        reference: Option<Reference>,
    },

    /// Reject the payment bound to `target`
    Reject { target: Reference },

    /// Pay again with the terms of the payment bound to `target`
    Repeat {
        target: Reference,
        reference: Option<Reference>,
    },

    /// Save the payment bound to `target` as a named favorite
    Favorite {
        target: Reference,
        name: String,
        reference: Option<Reference>,
    },

    /// Pay with the terms of the favorite bound to `target`
    PayFavorite {
        target: Reference,
        reference: Option<Reference>,
    },
}

impl Command {
    /// Operation name as written in replay scripts
    pub fn op(&self) -> &'static str {
        match self {
            Command::Register => "register",
            Command::Deposit { .. } => "deposit",
            Command::Pay { .. } => "pay",
            Command::Reject { .. } => "reject",
            Command::Repeat { .. } => "repeat",
            Command::Favorite { .. } => "favorite",
            Command::PayFavorite { .. } => "pay_favorite",
        }
    }
}

/// A command together with the phone of the account it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Phone of the account the command is addressed to
    pub phone: Phone,

    /// The operation to perform
    pub command: Command,
}
