//! Thread-safe ledger handle for concurrent replay
//!
//! This module provides `SharedService`, a cloneable handle around one
//! [`Service`] guarded by a single mutex.
//!
//! # Design
//!
//! The ledger's rules span several collections at once (a payment debits an
//! account and inserts a payment record), so the handle locks the whole
//! service for each operation instead of locking entities individually:
//!
//! ```text
//! SharedService (Clone)
//!     └── Arc<Mutex<Service>>
//! ```
//!
//! # Thread Safety
//!
//! Every operation holds the lock for its full read-modify-write sequence, so
//! the balance check and the debit inside `pay` can never interleave with
//! another task. Results are returned as owned clones because references
//! cannot outlive the guard.
//!
//! A poisoned lock is recovered: every operation validates before it mutates,
//! so a panicking holder cannot leave the service half-updated.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::service::Service;
use crate::core::traits::Ledger;
use crate::types::{Account, AccountId, Favorite, Money, Payment, WalletError};

/// Cloneable, lock-guarded handle to a single ledger
#[derive(Debug, Clone, Default)]
pub struct SharedService {
    inner: Arc<Mutex<Service>>,
}

impl SharedService {
    /// Create a handle around a fresh service
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing service
    pub fn from_service(service: Service) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Service> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run a closure against the locked service
    ///
    /// Lets callers combine several operations under one lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Service) -> R) -> R {
        f(&mut self.lock())
    }

    /// Register an account for a phone
    pub fn register_account(&self, phone: &str) -> Result<Account, WalletError> {
        self.lock().register_account(phone).cloned()
    }

    /// Credit an account by identifier
    pub fn deposit(&self, account_id: AccountId, amount: Money) -> Result<(), WalletError> {
        self.lock().deposit(account_id, amount)
    }

    /// Debit an account by identifier and record a payment
    pub fn pay(
        &self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> Result<Payment, WalletError> {
        self.lock().pay(account_id, amount, category).cloned()
    }

    /// Reject a payment and refund it
    pub fn reject(&self, payment_id: &str) -> Result<(), WalletError> {
        self.lock().reject(payment_id)
    }

    /// Pay again with the terms of an existing payment
    pub fn repeat(&self, payment_id: &str) -> Result<Payment, WalletError> {
        self.lock().repeat(payment_id).cloned()
    }

    /// Save a payment as a named favorite
    pub fn favorite_payment(&self, payment_id: &str, name: &str) -> Result<Favorite, WalletError> {
        self.lock().favorite_payment(payment_id, name).cloned()
    }

    /// Pay with the terms of a favorite
    pub fn pay_from_favorite(&self, favorite_id: &str) -> Result<Payment, WalletError> {
        self.lock().pay_from_favorite(favorite_id).cloned()
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<Account, WalletError> {
        self.lock().find_account_by_id(account_id).cloned()
    }

    pub fn find_account_by_phone(&self, phone: &str) -> Result<Account, WalletError> {
        self.lock().find_account_by_phone(phone).cloned()
    }

    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<Payment, WalletError> {
        self.lock().find_payment_by_id(payment_id).cloned()
    }

    pub fn find_favorite_by_id(&self, favorite_id: &str) -> Result<Favorite, WalletError> {
        self.lock().find_favorite_by_id(favorite_id).cloned()
    }

    /// Snapshot of all accounts sorted by identifier
    pub fn accounts(&self) -> Vec<Account> {
        self.lock().accounts().into_iter().cloned().collect()
    }

    /// Snapshot of all payments in creation order
    pub fn payments(&self) -> Vec<Payment> {
        self.lock().payments().into_iter().cloned().collect()
    }

    /// Snapshot of all favorites in creation order
    pub fn favorites(&self) -> Vec<Favorite> {
        self.lock().favorites().into_iter().cloned().collect()
    }
}

impl Ledger for SharedService {
    fn register_account(&mut self, phone: &str) -> Result<Account, WalletError> {
        SharedService::register_account(self, phone)
    }

    fn deposit(&mut self, phone: &str, amount: Money) -> Result<(), WalletError> {
        self.with(|service| Ledger::deposit(service, phone, amount))
    }

    fn pay(&mut self, phone: &str, amount: Money, category: &str) -> Result<Payment, WalletError> {
        self.with(|service| Ledger::pay(service, phone, amount, category))
    }

    fn reject(&mut self, payment_id: &str) -> Result<(), WalletError> {
        SharedService::reject(self, payment_id)
    }

    fn repeat(&mut self, payment_id: &str) -> Result<Payment, WalletError> {
        SharedService::repeat(self, payment_id)
    }

    fn favorite_payment(&mut self, payment_id: &str, name: &str) -> Result<Favorite, WalletError> {
        SharedService::favorite_payment(self, payment_id, name)
    }

    fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, WalletError> {
        SharedService::pay_from_favorite(self, favorite_id)
    }

    fn accounts(&self) -> Vec<Account> {
        SharedService::accounts(self)
    }

    fn payments(&self) -> Vec<Payment> {
        SharedService::payments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedService::new();
        let clone = shared.clone();

        let account = shared.register_account("+1").unwrap();
        clone.deposit(account.id, 40).unwrap();

        assert_eq!(shared.find_account_by_id(account.id).unwrap().balance, 40);
    }

    #[test]
    fn test_operations_return_owned_records() {
        let shared = SharedService::new();
        let account = shared.register_account("+1").unwrap();
        shared.deposit(account.id, 100).unwrap();

        let payment = shared.pay(account.id, 8, "auto").unwrap();
        shared.reject(&payment.id).unwrap();

        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert_eq!(
            shared.find_payment_by_id(&payment.id).unwrap().status,
            PaymentStatus::Fail
        );
        assert_eq!(shared.find_account_by_phone("+1").unwrap().balance, 100);
    }

    #[test]
    fn test_favorites_through_shared_handle() {
        let shared = SharedService::new();
        let account = shared.register_account("+1").unwrap();
        shared.deposit(account.id, 100).unwrap();
        let payment = shared.pay(account.id, 30, "mobile").unwrap();

        let favorite = shared.favorite_payment(&payment.id, "bill").unwrap();
        let repeated = shared.pay_from_favorite(&favorite.id).unwrap();

        assert_eq!(shared.find_favorite_by_id(&favorite.id).unwrap(), favorite);
        assert_eq!(repeated.terms(), payment.terms());
        assert_eq!(shared.favorites().len(), 1);
        assert_eq!(shared.payments().len(), 2);
    }

    #[test]
    fn test_ledger_trait_resolves_phone_under_lock() {
        let mut shared = SharedService::new();

        Ledger::register_account(&mut shared, "+1").unwrap();
        Ledger::deposit(&mut shared, "+1", 10).unwrap();
        let result = Ledger::pay(&mut shared, "+1", 11, "auto");

        assert_eq!(
            result.unwrap_err(),
            WalletError::insufficient_balance(1, 10, 11)
        );
        assert_eq!(Ledger::accounts(&shared)[0].balance, 10);
    }

    #[test]
    fn test_concurrent_payments_never_overdraw() {
        let shared = SharedService::new();
        let account = shared.register_account("+1").unwrap();
        shared.deposit(account.id, 100).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..10)
                        .filter(|_| shared.pay(account.id, 3, "auto").is_ok())
                        .count()
                })
            })
            .collect();

        let succeeded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(succeeded, 33);
        assert_eq!(shared.find_account_by_id(account.id).unwrap().balance, 1);
        assert_eq!(shared.payments().len(), 33);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedService::new();
        shared.register_account("+1").unwrap();

        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            poisoner.with(|_| panic!("holder panicked"));
        })
        .join();

        assert_eq!(shared.accounts().len(), 1);
        assert!(shared.register_account("+2").is_ok());
    }
}
