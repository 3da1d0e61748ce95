//! Replay command processing for async batch processing
//!
//! This module provides the `AsyncCommandEngine` struct, which applies replay
//! commands against a [`SharedService`] from many tasks at once.
//!
//! # Design
//!
//! The engine pairs the lock-guarded ledger with two concurrent label tables
//! that translate script references into generated identifiers:
//!
//! ```text
//! AsyncCommandEngine (Clone)
//!     ├── SharedService                         (one mutex around one Service)
//!     ├── Arc<DashMap<Reference, PaymentId>>    (payment labels)
//!     └── Arc<DashMap<Reference, FavoriteId>>   (favorite labels)
//! ```
//!
//! # Thread Safety
//!
//! Clones share all three components. Ledger operations are serialized by the
//! service lock; label lookups and bindings only lock the affected DashMap
//! shard and never while the service lock is held.

use std::sync::Arc;

use dashmap::DashMap;

use super::SharedService;
use crate::core::traits::Ledger;
use crate::types::{
    Account, Command, CommandRecord, FavoriteId, Payment, PaymentId, Reference, WalletError,
};

/// Replay command processor shared across async tasks
#[derive(Debug, Clone)]
pub struct AsyncCommandEngine {
    /// Lock-guarded ledger
    service: SharedService,

    /// Script labels bound to payment identifiers
    payment_refs: Arc<DashMap<Reference, PaymentId>>,

    /// Script labels bound to favorite identifiers
    favorite_refs: Arc<DashMap<Reference, FavoriteId>>,
}

impl AsyncCommandEngine {
    /// Create an engine around a shared ledger with empty label tables
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            payment_refs: Arc::new(DashMap::new()),
            favorite_refs: Arc::new(DashMap::new()),
        }
    }

    /// Apply a single command record
    ///
    /// Commands for one phone must be applied in file order by the caller;
    /// commands for different phones may run concurrently.
    ///
    /// # Errors
    ///
    /// Returns `UnknownReference` for an unbound target label, or the ledger
    /// error of the underlying operation.
    pub fn process_command(&self, record: CommandRecord) -> Result<(), WalletError> {
        let CommandRecord { phone, command } = record;

        match command {
            Command::Register => {
                self.service.register_account(&phone)?;
            }
            Command::Deposit { amount } => {
                self.service
                    .with(|service| Ledger::deposit(service, &phone, amount))?;
            }
            Command::Pay {
                amount,
                category,
                reference,
            } => {
                let payment = self
                    .service
                    .with(|service| Ledger::pay(service, &phone, amount, &category))?;
                self.bind_payment(reference, payment);
            }
            Command::Reject { target } => {
                let payment_id = self.resolve_payment(&target)?;
                self.service.reject(&payment_id)?;
            }
            Command::Repeat { target, reference } => {
                let payment_id = self.resolve_payment(&target)?;
                let payment = self.service.repeat(&payment_id)?;
                self.bind_payment(reference, payment);
            }
            Command::Favorite {
                target,
                name,
                reference,
            } => {
                let payment_id = self.resolve_payment(&target)?;
                let favorite = self.service.favorite_payment(&payment_id, &name)?;
                if let Some(reference) = reference {
                    self.favorite_refs.insert(reference, favorite.id);
                }
            }
            Command::PayFavorite { target, reference } => {
                let favorite_id = self
                    .favorite_refs
                    .get(&target)
                    .map(|entry| entry.value().clone())
                    .ok_or_else(|| WalletError::unknown_reference("favorite", &target))?;
                let payment = self.service.pay_from_favorite(&favorite_id)?;
                self.bind_payment(reference, payment);
            }
        }

        Ok(())
    }

    fn resolve_payment(&self, target: &str) -> Result<PaymentId, WalletError> {
        self.payment_refs
            .get(target)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| WalletError::unknown_reference("payment", target))
    }

    fn bind_payment(&self, reference: Option<Reference>, payment: Payment) {
        if let Some(reference) = reference {
            self.payment_refs.insert(reference, payment.id);
        }
    }

    /// Final account states sorted by identifier
    pub fn get_accounts(&self) -> Vec<Account> {
        self.service.accounts()
    }

    /// All payments in creation order
    pub fn get_payments(&self) -> Vec<Payment> {
        self.service.payments()
    }

    /// The shared ledger handle
    pub fn service(&self) -> &SharedService {
        &self.service
    }
}
