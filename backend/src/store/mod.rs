//! Store - loaded transactions and the reporting queries
//!
//! See `transaction_store.rs` for the query surface.

pub mod aggregate;
pub mod loader;
pub mod transaction_store;

// Re-export main types for convenience
pub use aggregate::SenderTotal;
pub use loader::{FieldError, LoadError};
pub use transaction_store::{TransactionStore, TOP_RANK_SIZE};
