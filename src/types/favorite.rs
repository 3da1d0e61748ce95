//! Favorite payment templates

use super::account::{AccountId, Money};
use super::payment::{new_record_id, Payment, PaymentCategory};
use serde::{Deserialize, Serialize};

/// Favorite identifier (UUIDv4 text)
pub type FavoriteId = String;

/// A named snapshot of a payment's terms, reusable for quick repayment
///
/// Favorites copy the account, amount and category at the time they are
/// created; later changes to the source payment do not affect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub name: String,
    pub account_id: AccountId,
    pub amount: Money,
    pub category: PaymentCategory,
}

impl Favorite {
    /// Snapshot a payment into a new favorite with a fresh identifier
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Favorite {
            id: new_record_id(),
            name: name.into(),
            account_id: payment.account_id,
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }

    pub fn terms(&self) -> (AccountId, Money, &str) {
        (self.account_id, self.amount, &self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payment_copies_terms() {
        let payment = Payment::new(3, 250, "mobile");
        let favorite = Favorite::from_payment(&payment, "phone bill");

        assert_eq!(favorite.name, "phone bill");
        assert_eq!(favorite.terms(), payment.terms());
        assert_ne!(favorite.id, payment.id);
    }
}
