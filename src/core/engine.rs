//! Replay command engine
//!
//! This module provides the CommandEngine that applies replay commands to a
//! [`Ledger`], translating script labels into the payment and favorite
//! identifiers generated at run time.
//!
//! The engine enforces replay rules such as:
//! - Labels must be bound before they are used as targets
//! - Payment and favorite labels live in separate namespaces
//! - A label rebound by a later command points at the newer record

use crate::core::service::Service;
use crate::core::traits::Ledger;
use crate::types::{
    Account, Command, CommandRecord, FavoriteId, Payment, PaymentId, Reference, WalletError,
};
use std::collections::HashMap;

/// Sequential command processor
///
/// Owns a ledger and the label tables of one replay script.
pub struct CommandEngine<L: Ledger = Service> {
    ledger: L,
    payment_refs: HashMap<Reference, PaymentId>,
    favorite_refs: HashMap<Reference, FavoriteId>,
}

impl CommandEngine<Service> {
    /// Create an engine over a fresh in-memory service
    pub fn new() -> Self {
        Self::with_ledger(Service::new())
    }
}

impl<L: Ledger> CommandEngine<L> {
    /// Create an engine over an existing ledger
    pub fn with_ledger(ledger: L) -> Self {
        CommandEngine {
            ledger,
            payment_refs: HashMap::new(),
            favorite_refs: HashMap::new(),
        }
    }

    /// Apply a single command record
    ///
    /// Routes the command to the matching ledger operation. Labels are only
    /// bound when the operation succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A target label is unknown
    /// - The ledger operation fails (duplicate phone, insufficient balance, etc.)
    pub fn process(&mut self, record: CommandRecord) -> Result<(), WalletError> {
        let CommandRecord { phone, command } = record;

        match command {
            Command::Register => {
                self.ledger.register_account(&phone)?;
            }
            Command::Deposit { amount } => {
                self.ledger.deposit(&phone, amount)?;
            }
            Command::Pay {
                amount,
                category,
                reference,
            } => {
                let payment = self.ledger.pay(&phone, amount, &category)?;
                self.bind_payment(reference, payment);
            }
            Command::Reject { target } => {
                let payment_id = self.resolve_payment(&target)?;
                self.ledger.reject(&payment_id)?;
            }
            Command::Repeat { target, reference } => {
                let payment_id = self.resolve_payment(&target)?;
                let payment = self.ledger.repeat(&payment_id)?;
                self.bind_payment(reference, payment);
            }
            Command::Favorite {
                target,
                name,
                reference,
            } => {
                let payment_id = self.resolve_payment(&target)?;
                let favorite = self.ledger.favorite_payment(&payment_id, &name)?;
                if let Some(reference) = reference {
                    self.favorite_refs.insert(reference, favorite.id);
                }
            }
            Command::PayFavorite { target, reference } => {
                let favorite_id = self
                    .favorite_refs
                    .get(&target)
                    .cloned()
                    .ok_or_else(|| WalletError::unknown_reference("favorite", &target))?;
                let payment = self.ledger.pay_from_favorite(&favorite_id)?;
                self.bind_payment(reference, payment);
            }
        }

        Ok(())
    }

    fn resolve_payment(&self, target: &str) -> Result<PaymentId, WalletError> {
        self.payment_refs
            .get(target)
            .cloned()
            .ok_or_else(|| WalletError::unknown_reference("payment", target))
    }

    fn bind_payment(&mut self, reference: Option<Reference>, payment: Payment) {
        if let Some(reference) = reference {
            self.payment_refs.insert(reference, payment.id);
        }
    }

    /// Get final account states sorted by identifier
    pub fn get_accounts(&self) -> Vec<Account> {
        self.ledger.accounts()
    }

    /// Get all payments in creation order
    pub fn get_payments(&self) -> Vec<Payment> {
        self.ledger.payments()
    }

    /// Borrow the underlying ledger
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl Default for CommandEngine<Service> {
    fn default() -> Self {
        Self::new()
    }
}
