//! Domain models for the transaction report

pub mod transaction;

// Re-exports
pub use transaction::{IssueId, Transaction};
