//! Transaction Report Core
//!
//! Loads a JSON document of money transfers and answers a fixed set of
//! reporting queries over it.
//!
//! # Architecture
//!
//! - **models**: Domain types (Transaction)
//! - **store**: JSON loading and the read-only query surface
//!
//! # Critical Invariants
//!
//! 1. Transactions are loaded once and never mutated
//! 2. A load either succeeds completely or fails with a typed error
//! 3. Rankings are stable for equal amounts

// Module declarations
pub mod models;
pub mod store;

// Re-exports for convenience
pub use models::transaction::{IssueId, Transaction};
pub use store::{FieldError, LoadError, SenderTotal, TransactionStore, TOP_RANK_SIZE};
