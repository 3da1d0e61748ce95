//! Concurrent implementations of core components
//!
//! This module provides the thread-safe pieces used by the async replay
//! strategy.
//!
//! # Architecture
//!
//! - **SharedService**: one `Service` behind one mutex, cloneable across tasks
//! - **AsyncCommandEngine**: applies replay commands, label tables in DashMap
//! - **BatchProcessor**: splits batches by phone and runs each phone in a task
//!
//! # Thread Safety
//!
//! - Commands for different phones proceed in parallel tasks
//! - Ledger operations are serialized by the single service lock
//! - Commands for the same phone run in order inside one task

pub mod batch_processor;
pub mod engine;
pub mod shared_service;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use engine::AsyncCommandEngine;
pub use shared_service::SharedService;
