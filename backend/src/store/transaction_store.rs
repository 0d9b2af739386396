//! Transaction Store
//!
//! Owns the loaded transactions and answers the reporting queries.
//!
//! # Critical Invariants
//!
//! 1. **Immutability**: The transaction sequence is fixed at construction
//! 2. **Positional Identity**: Records are identified by position only
//! 3. **Stable Ranking**: Equal amounts keep their original relative order
//! 4. **No Partial Loads**: A failed load produces no store at all

use crate::models::transaction::{IssueId, Transaction};
use crate::store::aggregate::{self, SenderTotal};
use crate::store::loader::{self, LoadError};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

/// Number of records returned by [`TransactionStore::top3_by_amount`]
pub const TOP_RANK_SIZE: usize = 3;

/// In-memory, read-only set of transactions
///
/// Every query borrows the store immutably, so a store can be shared
/// between threads without locking.
///
/// # Example
///
/// ```rust
/// use transaction_report_core::{Transaction, TransactionStore};
///
/// let store = TransactionStore::new(vec![
///     Transaction::new("A".to_string(), "B".to_string(), 100.0),
///     Transaction::new("B".to_string(), "A".to_string(), 50.0).with_issue(7, false),
/// ]);
///
/// assert_eq!(store.total_amount(), 150.0);
/// assert_eq!(store.count_unique_clients(), 2);
/// assert!(store.has_open_compliance_issues("A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    /// All transactions, in document order
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store from already typed transactions
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Create a store from a JSON document held in memory
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the document is malformed, is not an array,
    /// or any record lacks a required field.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        loader::parse_str(json).map(Self::new)
    }

    /// Create a store from a JSON document read from `reader`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        loader::parse_reader(reader).map(Self::new)
    }

    /// Create a store from a JSON file on disk
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use transaction_report_core::TransactionStore;
    ///
    /// let store = TransactionStore::from_path("transactions.json")?;
    /// println!("{} transactions", store.len());
    /// # Ok::<(), transaction_report_core::LoadError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let store = Self::new(loader::load_path(path)?);
        tracing::debug!(
            path = %path.display(),
            count = store.len(),
            "loaded transactions"
        );
        Ok(store)
    }

    /// All transactions in document order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Sum of the amounts of all transactions
    ///
    /// Returns `0.0` for an empty store.
    pub fn total_amount(&self) -> f64 {
        sum_amounts(self.transactions.iter())
    }

    /// Sum of the amounts of all transactions sent by `sender_full_name`
    ///
    /// Exact, case-sensitive match. Returns `0.0` if the client sent nothing.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        sum_amounts(
            self.transactions
                .iter()
                .filter(|tx| tx.sender_full_name() == sender_full_name),
        )
    }

    /// Highest transaction amount, or `None` for an empty store
    pub fn max_amount(&self) -> Option<f64> {
        self.transactions
            .iter()
            .map(Transaction::amount)
            .max_by(f64::total_cmp)
    }

    /// Number of distinct client names across senders and beneficiaries
    pub fn count_unique_clients(&self) -> usize {
        self.transactions
            .iter()
            .flat_map(|tx| [tx.sender_full_name(), tx.beneficiary_full_name()])
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Whether the client, as sender or beneficiary, has any unsolved issue
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.involves(client_full_name) && tx.has_open_issue())
    }

    /// All transactions keyed by beneficiary name
    ///
    /// Within a group, transactions keep their document order. The map
    /// itself has no defined iteration order.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&str, Vec<&Transaction>> {
        let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for tx in &self.transactions {
            groups.entry(tx.beneficiary_full_name()).or_default().push(tx);
        }
        groups
    }

    /// Distinct ids of all unsolved compliance issues
    ///
    /// Unsolved transactions without an issue id are skipped.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<IssueId> {
        self.transactions
            .iter()
            .filter(|tx| tx.has_open_issue())
            .filter_map(Transaction::issue_id)
            .collect()
    }

    /// Messages of all solved issues, in document order, duplicates kept
    pub fn solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue_solved())
            .filter_map(Transaction::issue_message)
            .collect()
    }

    /// The `n` transactions with the highest amount, largest first
    ///
    /// The sort is stable: equal amounts keep their document order.
    pub fn top_by_amount(&self, n: usize) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        ranked.sort_by(|a, b| aggregate::by_amount_desc(a, b));
        ranked.truncate(n);
        ranked
    }

    /// The 3 transactions with the highest amount, largest first
    ///
    /// Returns every transaction if the store holds fewer than 3.
    pub fn top3_by_amount(&self) -> Vec<&Transaction> {
        self.top_by_amount(TOP_RANK_SIZE)
    }

    /// Total sent per client, in the order senders first appear
    pub fn sender_totals(&self) -> Vec<SenderTotal<'_>> {
        aggregate::sender_totals(&self.transactions)
    }

    /// The client with the largest total sent amount
    ///
    /// When several senders share the largest total, the one appearing
    /// first in the document wins. Returns `None` only for an empty store.
    ///
    /// Reports the sender and its total rather than an arbitrary record;
    /// use [`TransactionStore::transactions_sent_by`] to list its transfers.
    pub fn top_sender(&self) -> Option<SenderTotal<'_>> {
        aggregate::largest_total(self.sender_totals())
    }

    /// All transactions sent by `sender_full_name`, in document order
    pub fn transactions_sent_by(&self, sender_full_name: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.sender_full_name() == sender_full_name)
            .collect()
    }
}

/// Sum amounts starting from `+0.0`
///
/// `Iterator::sum` for floats starts from `-0.0`, which prints as `-0`.
fn sum_amounts<'a, I>(transactions: I) -> f64
where
    I: Iterator<Item = &'a Transaction>,
{
    transactions.fold(0.0, |acc, tx| acc + tx.amount())
}
