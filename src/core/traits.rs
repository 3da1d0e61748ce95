//! Core trait over ledger implementations
//!
//! This module defines the trait abstraction that allows both the plain
//! [`Service`] and the lock-guarded [`SharedService`] to drive the replay
//! engine interchangeably.
//!
//! [`SharedService`]: crate::core::r#async::SharedService

use crate::core::service::Service;
use crate::types::{Account, Favorite, Money, Payment, WalletError};

/// Mutating ledger operations with owned results
///
/// Results are clones of the stored records, so implementations are free to
/// hide their storage behind a lock.
pub trait Ledger {
    /// Register an account for a phone
    fn register_account(&mut self, phone: &str) -> Result<Account, WalletError>;

    /// Credit the account owning `phone`
    fn deposit(&mut self, phone: &str, amount: Money) -> Result<(), WalletError>;

    /// Debit the account owning `phone` and record a payment
    fn pay(&mut self, phone: &str, amount: Money, category: &str) -> Result<Payment, WalletError>;

    /// Reject a payment and refund it
    fn reject(&mut self, payment_id: &str) -> Result<(), WalletError>;

    /// Pay again with the terms of an existing payment
    fn repeat(&mut self, payment_id: &str) -> Result<Payment, WalletError>;

    /// Save a payment as a named favorite
    fn favorite_payment(&mut self, payment_id: &str, name: &str) -> Result<Favorite, WalletError>;

    /// Pay with the terms of a favorite
    fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, WalletError>;

    /// Snapshot of all accounts sorted by identifier
    fn accounts(&self) -> Vec<Account>;

    /// Snapshot of all payments in creation order
    fn payments(&self) -> Vec<Payment>;
}

impl Ledger for Service {
    fn register_account(&mut self, phone: &str) -> Result<Account, WalletError> {
        Service::register_account(self, phone).cloned()
    }

    fn deposit(&mut self, phone: &str, amount: Money) -> Result<(), WalletError> {
        if amount <= 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }
        let account_id = self.find_account_by_phone(phone)?.id;
        Service::deposit(self, account_id, amount)
    }

    fn pay(&mut self, phone: &str, amount: Money, category: &str) -> Result<Payment, WalletError> {
        if amount <= 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }
        let account_id = self.find_account_by_phone(phone)?.id;
        Service::pay(self, account_id, amount, category).cloned()
    }

    fn reject(&mut self, payment_id: &str) -> Result<(), WalletError> {
        Service::reject(self, payment_id)
    }

    fn repeat(&mut self, payment_id: &str) -> Result<Payment, WalletError> {
        Service::repeat(self, payment_id).cloned()
    }

    fn favorite_payment(&mut self, payment_id: &str, name: &str) -> Result<Favorite, WalletError> {
        Service::favorite_payment(self, payment_id, name).cloned()
    }

    fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, WalletError> {
        Service::pay_from_favorite(self, favorite_id).cloned()
    }

    fn accounts(&self) -> Vec<Account> {
        Service::accounts(self).into_iter().cloned().collect()
    }

    fn payments(&self) -> Vec<Payment> {
        Service::payments(self).into_iter().cloned().collect()
    }
}
