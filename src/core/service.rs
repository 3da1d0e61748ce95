//! Wallet ledger service
//!
//! This module provides the `Service` that owns the account, payment and
//! favorite collections and implements every ledger operation on top of them.
//!
//! The service enforces business rules such as:
//! - Phone uniqueness and sequential account identifiers
//! - Strictly positive deposit and payment amounts
//! - Payments never exceeding the available balance
//! - Full refunds on rejection
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! ledger exactly as it was.

use crate::core::account_manager::AccountManager;
use crate::core::favorite_store::FavoriteStore;
use crate::core::payment_store::PaymentStore;
use crate::types::{Account, AccountId, Favorite, Money, Payment, WalletError};

/// In-memory wallet ledger
///
/// Lookups hand out borrowed references into the live records; any mutation
/// requires `&mut Service`, so a caller that looks a record up again after a
/// mutation observes the new state.
#[derive(Debug)]
pub struct Service {
    account_manager: AccountManager,
    payment_store: PaymentStore,
    favorite_store: FavoriteStore,
}

impl Service {
    /// Create an empty ledger
    pub fn new() -> Self {
        Service {
            account_manager: AccountManager::new(),
            payment_store: PaymentStore::new(),
            favorite_store: FavoriteStore::new(),
        }
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new account with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `PhoneAlreadyRegistered` if any account already uses the phone.
    pub fn register_account(&mut self, phone: &str) -> Result<&Account, WalletError> {
        self.account_manager.register(phone)
    }

    /// Add funds to an account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account does not exist
    /// - The balance would overflow
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), WalletError> {
        if amount <= 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }

        self.find_account_by_id(account_id)?;
        self.account_manager.credit(account_id, amount, "deposit")?;

        Ok(())
    }

    // ========================
    // Payment operations
    // ========================

    /// Debit an account and record an in-progress payment
    ///
    /// Validation order is amount, account, balance; nothing is changed unless
    /// all three pass.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account does not exist
    /// - The balance is lower than the amount
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> Result<&Payment, WalletError> {
        if amount <= 0 {
            return Err(WalletError::amount_must_be_positive(amount));
        }

        let account = self.find_account_by_id(account_id)?;
        if account.balance < amount {
            return Err(WalletError::insufficient_balance(
                account_id,
                account.balance,
                amount,
            ));
        }

        self.account_manager.debit(account_id, amount)?;

        Ok(self
            .payment_store
            .store(Payment::new(account_id, amount, category)))
    }

    /// Reject a payment and refund its amount
    ///
    /// The refund does not depend on the current status: rejecting an already
    /// failed payment credits the amount again.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payment does not exist
    /// - The payment's account no longer resolves
    /// - The refund would overflow the balance
    pub fn reject(&mut self, payment_id: &str) -> Result<(), WalletError> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount) = (payment.account_id, payment.amount);

        let account = self.find_account_by_id(account_id)?;
        if account.balance.checked_add(amount).is_none() {
            return Err(WalletError::balance_overflow("reject", account_id));
        }

        self.payment_store.mark_failed(payment_id)?;
        self.account_manager.credit(account_id, amount, "reject")?;

        Ok(())
    }

    /// Pay again with the account, amount and category of an existing payment
    ///
    /// The new payment is independent: fresh identifier, fresh balance check.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` for an unknown payment; any error from
    /// [`Service::pay`] is propagated unchanged.
    pub fn repeat(&mut self, payment_id: &str) -> Result<&Payment, WalletError> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) =
            (payment.account_id, payment.amount, payment.category.clone());

        self.pay(account_id, amount, &category)
    }

    // ========================
    // Favorite operations
    // ========================

    /// Save the terms of a payment as a named favorite
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` for an unknown payment.
    pub fn favorite_payment(
        &mut self,
        payment_id: &str,
        name: &str,
    ) -> Result<&Favorite, WalletError> {
        let favorite = Favorite::from_payment(self.find_payment_by_id(payment_id)?, name);

        Ok(self.favorite_store.store(favorite))
    }

    /// Pay with the terms stored in a favorite
    ///
    /// # Errors
    ///
    /// Returns `FavoriteNotFound` for an unknown favorite; any error from
    /// [`Service::pay`] is propagated unchanged.
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<&Payment, WalletError> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) = (
            favorite.account_id,
            favorite.amount,
            favorite.category.clone(),
        );

        self.pay(account_id, amount, &category)
    }

    // ========================
    // Lookups
    // ========================

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account, WalletError> {
        self.account_manager
            .get(account_id)
            .ok_or_else(|| WalletError::account_not_found(account_id))
    }

    pub fn find_account_by_phone(&self, phone: &str) -> Result<&Account, WalletError> {
        self.account_manager
            .get_by_phone(phone)
            .ok_or_else(|| WalletError::account_not_found(phone))
    }

    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<&Payment, WalletError> {
        self.payment_store
            .get(payment_id)
            .ok_or_else(|| WalletError::payment_not_found(payment_id))
    }

    pub fn find_favorite_by_id(&self, favorite_id: &str) -> Result<&Favorite, WalletError> {
        self.favorite_store
            .get(favorite_id)
            .ok_or_else(|| WalletError::favorite_not_found(favorite_id))
    }

    /// All accounts sorted by identifier
    pub fn accounts(&self) -> Vec<&Account> {
        self.account_manager.get_all_accounts()
    }

    /// All payments in creation order
    pub fn payments(&self) -> Vec<&Payment> {
        self.payment_store.iter().collect()
    }

    /// Payments of one account in creation order
    pub fn payments_for_account(&self, account_id: AccountId) -> Vec<&Payment> {
        self.payment_store.for_account(account_id).collect()
    }

    /// All favorites in creation order
    pub fn favorites(&self) -> Vec<&Favorite> {
        self.favorite_store.iter().collect()
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
