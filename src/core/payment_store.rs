//! Payment storage
//!
//! This module provides the PaymentStore component that owns every payment
//! created by the ledger. Payments are never removed; the only mutation is a
//! status change on rejection.
//!
//! Lookups go through a map keyed by payment identifier, while a separate
//! index remembers creation order for listings.

use crate::types::{AccountId, Payment, PaymentId, PaymentStatus, WalletError};
use std::collections::HashMap;

/// Owns all payments, keyed by identifier
#[derive(Debug)]
pub struct PaymentStore {
    /// Map of payment identifier to payment
    payments: HashMap<PaymentId, Payment>,

    /// Payment identifiers in creation order
    order: Vec<PaymentId>,
}

impl PaymentStore {
    /// Create a new empty payment store
    pub fn new() -> Self {
        PaymentStore {
            payments: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store a new payment and return a reference to the stored record
    ///
    /// Identifiers are random UUIDs; should one ever repeat, the first payment
    /// is kept and the new one is dropped, so existing references stay valid.
    pub fn store(&mut self, payment: Payment) -> &Payment {
        let id = payment.id.clone();
        if !self.payments.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.payments.entry(id).or_insert(payment)
    }

    /// Get a payment by identifier
    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.payments.get(id)
    }

    /// Get a payment by identifier for mutation
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Payment> {
        self.payments.get_mut(id)
    }

    /// Mark a payment as failed
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the identifier is unknown.
    pub fn mark_failed(&mut self, id: &str) -> Result<&Payment, WalletError> {
        let payment = self
            .get_mut(id)
            .ok_or_else(|| WalletError::payment_not_found(id))?;
        payment.status = PaymentStatus::Fail;
        Ok(payment)
    }

    /// All payments in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Payment> {
        self.order.iter().filter_map(|id| self.payments.get(id))
    }

    /// Payments of one account in creation order
    pub fn for_account(&self, account_id: AccountId) -> impl Iterator<Item = &Payment> {
        self.iter()
            .filter(move |payment| payment.account_id == account_id)
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl Default for PaymentStore {
    fn default() -> Self {
        Self::new()
    }
}
