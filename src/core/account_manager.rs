//! Account management module
//!
//! This module provides the `AccountManager` struct which owns every wallet
//! account and provides the balance operations the service builds on.
//!
//! The AccountManager is responsible for:
//! - Registering accounts with unique phones and sequential identifiers
//! - Resolving accounts by identifier or phone
//! - Crediting and debiting balances with checked arithmetic
//! - Providing sorted account listings for output

use crate::types::{Account, AccountId, Money, WalletError};
use std::collections::HashMap;

/// Owns all accounts, indexed by identifier and by phone
#[derive(Debug)]
pub struct AccountManager {
    /// Map of account identifiers to account states
    accounts: HashMap<AccountId, Account>,

    /// Phone uniqueness index
    phones: HashMap<String, AccountId>,

    /// Last identifier handed out (0 before the first registration)
    last_id: AccountId,
}

impl AccountManager {
    /// Create a new AccountManager with no accounts
    pub fn new() -> Self {
        AccountManager {
            accounts: HashMap::new(),
            phones: HashMap::new(),
            last_id: 0,
        }
    }

    /// Register a new account for a phone
    ///
    /// The identifier counter only advances when registration succeeds, so
    /// identifiers stay dense: 1, 2, 3, ...
    ///
    /// # Errors
    ///
    /// Returns `PhoneAlreadyRegistered` if another account uses the phone.
    pub fn register(&mut self, phone: &str) -> Result<&Account, WalletError> {
        if self.phones.contains_key(phone) {
            return Err(WalletError::phone_already_registered(phone));
        }

        self.last_id += 1;
        let id = self.last_id;

        self.phones.insert(phone.to_string(), id);
        Ok(self.accounts.entry(id).or_insert(Account::new(id, phone)))
    }

    /// Look up an account by identifier
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Look up an account by identifier for mutation
    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Look up an account by phone
    pub fn get_by_phone(&self, phone: &str) -> Option<&Account> {
        self.phones.get(phone).and_then(|id| self.accounts.get(id))
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get all accounts sorted by identifier
    ///
    /// Sorting makes the listing deterministic regardless of map order.
    pub fn get_all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Add funds to an account balance
    ///
    /// Amount validation is the caller's concern; this only guards the
    /// arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account has the given identifier
    /// - The addition would overflow the balance
    pub fn credit(
        &mut self,
        id: AccountId,
        amount: Money,
        operation: &str,
    ) -> Result<&Account, WalletError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| WalletError::account_not_found(id))?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::balance_overflow(operation, id))?;

        Ok(account)
    }

    /// Remove funds from an account balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account has the given identifier
    /// - The balance is lower than the amount
    pub fn debit(&mut self, id: AccountId, amount: Money) -> Result<&Account, WalletError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| WalletError::account_not_found(id))?;

        if account.balance < amount {
            return Err(WalletError::insufficient_balance(
                id,
                account.balance,
                amount,
            ));
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| WalletError::balance_overflow("debit", id))?;

        Ok(account)
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new()
    }
}
