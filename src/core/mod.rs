//! Core business logic module
//!
//! This module contains the ledger and the replay machinery around it:
//! - `account_manager` - Account state, phone index and balance arithmetic
//! - `payment_store` - Payment records in creation order
//! - `favorite_store` - Favorite payment templates
//! - `service` - The ledger operation surface
//! - `traits` - Owned-result ledger abstraction
//! - `engine` - Sequential replay command processing
//! - `async` - Lock-guarded ledger and concurrent batch processing

pub mod account_manager;
pub mod r#async;
pub mod engine;
pub mod favorite_store;
pub mod payment_store;
pub mod service;
pub mod traits;

pub use account_manager::AccountManager;
pub use engine::CommandEngine;
pub use favorite_store::FavoriteStore;
pub use payment_store::PaymentStore;
pub use r#async::{AsyncCommandEngine, BatchProcessor, SharedService};
pub use service::Service;
pub use traits::Ledger;
