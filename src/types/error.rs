//! Error types for the wallet ledger
//!
//! This module defines every error a ledger operation or a replay can report.
//! Errors are plain values: no ledger operation panics on invalid input, and
//! every failure leaves the ledger state untouched.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: duplicate phone, unknown account/payment/favorite,
//!   non-positive amount, insufficient balance
//! - **Arithmetic Errors**: balance overflow on credit
//! - **Replay Errors**: unknown script reference, malformed record, I/O

use crate::types::{AccountId, Money};
use thiserror::Error;

/// Main error type for the wallet ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Another account already uses this phone
    #[error("Phone already registered: {phone}")]
    PhoneAlreadyRegistered {
        /// The duplicate phone
        phone: String,
    },

    /// No account matches the given identifier or phone
    #[error("Account not found: {account}")]
    AccountNotFound {
        /// Identifier or phone that failed to resolve
        account: String,
    },

    /// Deposits and payments require a strictly positive amount
    #[error("Amount must be greater than zero, got {amount}")]
    AmountMustBePositive {
        /// The rejected amount
        amount: Money,
    },

    /// The account balance does not cover the payment
    ///
    /// The payment is not created and the balance is unchanged.
    #[error("Insufficient funds on balance of account {account}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Account identifier
        account: AccountId,
        /// Balance at the time of the attempt
        balance: Money,
        /// Requested payment amount
        requested: Money,
    },

    /// No payment matches the given identifier
    #[error("Payment not found: {payment}")]
    PaymentNotFound {
        /// The unknown payment identifier
        payment: String,
    },

    /// No favorite matches the given identifier
    #[error("Favorite not found: {favorite}")]
    FavoriteNotFound {
        /// The unknown favorite identifier
        favorite: String,
    },

    /// Crediting the account would overflow the balance
    #[error("Balance overflow in {operation} for account {account}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: AccountId,
    },

    /// A replay script used a label that was never bound
    #[error("Unknown {kind} reference '{reference}'")]
    UnknownReference {
        /// "payment" or "favorite"
        kind: String,
        /// The unbound label
        reference: String,
    },

    /// A replay record could not be decoded
    #[error("Malformed record{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number of the record (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// I/O error while reading a script or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        WalletError::MalformedRecord {
            line,
            message: error.to_string(),
        }
    }
}

impl WalletError {
    pub fn phone_already_registered(phone: &str) -> Self {
        WalletError::PhoneAlreadyRegistered {
            phone: phone.to_string(),
        }
    }

    /// Create an AccountNotFound error from an identifier or a phone
    pub fn account_not_found(account: impl ToString) -> Self {
        WalletError::AccountNotFound {
            account: account.to_string(),
        }
    }

    pub fn amount_must_be_positive(amount: Money) -> Self {
        WalletError::AmountMustBePositive { amount }
    }

    pub fn insufficient_balance(account: AccountId, balance: Money, requested: Money) -> Self {
        WalletError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    pub fn payment_not_found(payment: &str) -> Self {
        WalletError::PaymentNotFound {
            payment: payment.to_string(),
        }
    }

    pub fn favorite_not_found(favorite: &str) -> Self {
        WalletError::FavoriteNotFound {
            favorite: favorite.to_string(),
        }
    }

    pub fn balance_overflow(operation: &str, account: AccountId) -> Self {
        WalletError::BalanceOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    pub fn unknown_reference(kind: &str, reference: &str) -> Self {
        WalletError::UnknownReference {
            kind: kind.to_string(),
            reference: reference.to_string(),
        }
    }

    pub fn malformed_record(line: Option<u64>, message: impl Into<String>) -> Self {
        WalletError::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::phone_already_registered(
        WalletError::PhoneAlreadyRegistered { phone: "+992927894561".to_string() },
        "Phone already registered: +992927894561"
    )]
    #[case::account_not_found(
        WalletError::AccountNotFound { account: "2".to_string() },
        "Account not found: 2"
    )]
    #[case::amount_must_be_positive(
        WalletError::AmountMustBePositive { amount: -9 },
        "Amount must be greater than zero, got -9"
    )]
    #[case::insufficient_balance(
        WalletError::InsufficientBalance { account: 1, balance: 10, requested: 11 },
        "Insufficient funds on balance of account 1: balance 10, requested 11"
    )]
    #[case::payment_not_found(
        WalletError::PaymentNotFound { payment: "tes".to_string() },
        "Payment not found: tes"
    )]
    #[case::favorite_not_found(
        WalletError::FavoriteNotFound { favorite: "fav".to_string() },
        "Favorite not found: fav"
    )]
    #[case::balance_overflow(
        WalletError::BalanceOverflow { operation: "deposit".to_string(), account: 1 },
        "Balance overflow in deposit for account 1"
    )]
    #[case::unknown_reference(
        WalletError::UnknownReference { kind: "payment".to_string(), reference: "p9".to_string() },
        "Unknown payment reference 'p9'"
    )]
    #[case::malformed_with_line(
        WalletError::MalformedRecord { line: Some(4), message: "missing amount".to_string() },
        "Malformed record at line 4: missing amount"
    )]
    #[case::malformed_without_line(
        WalletError::MalformedRecord { line: None, message: "missing amount".to_string() },
        "Malformed record: missing amount"
    )]
    fn test_error_display(#[case] error: WalletError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found_by_id(
        WalletError::account_not_found(2),
        WalletError::AccountNotFound { account: "2".to_string() }
    )]
    #[case::account_not_found_by_phone(
        WalletError::account_not_found("+100"),
        WalletError::AccountNotFound { account: "+100".to_string() }
    )]
    #[case::insufficient_balance(
        WalletError::insufficient_balance(1, 10, 11),
        WalletError::InsufficientBalance { account: 1, balance: 10, requested: 11 }
    )]
    #[case::unknown_reference(
        WalletError::unknown_reference("favorite", "f1"),
        WalletError::UnknownReference { kind: "favorite".to_string(), reference: "f1".to_string() }
    )]
    fn test_helper_functions(#[case] result: WalletError, #[case] expected: WalletError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: WalletError = io_error.into();
        assert!(matches!(error, WalletError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
