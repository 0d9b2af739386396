//! Transaction model
//!
//! Represents a single transfer between two clients.
//! Each transaction has:
//! - Sender and beneficiary full names
//! - Amount (f64, as carried by the source document)
//! - Compliance issue data: optional issue id, solved flag, optional message
//! - Any additional keys of the source record, kept verbatim
//!
//! Transactions are immutable once built. Identity is positional: two
//! records may be identical in every field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a compliance issue raised on a transaction
pub type IssueId = i64;

/// Represents a transfer between a sender and a beneficiary
///
/// # Example
/// ```
/// use transaction_report_core::Transaction;
///
/// let tx = Transaction::new(
///     "Tom Shelby".to_string(),
///     "Alfie Solomons".to_string(),
///     985.0,
/// )
/// .with_issue(1, false)
/// .with_issue_message("Looks like money laundering".to_string());
///
/// assert!(tx.has_open_issue());
/// assert_eq!(tx.issue_id(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transferred amount
    amount: f64,

    /// Full name of the sending client
    sender_full_name: String,

    /// Full name of the receiving client
    beneficiary_full_name: String,

    /// Compliance issue id, present only when an issue was raised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issue_id: Option<IssueId>,

    /// Whether the compliance issue (if any) has been solved
    ///
    /// Required on every record. Records without an issue carry `true`.
    issue_solved: bool,

    /// Description attached to the compliance issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issue_message: Option<String>,

    /// Remaining keys of the source record (e.g. `mtn`, `senderAge`)
    ///
    /// Never consulted by queries; kept so a record prints as it was read.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Transaction {
    /// Create a transaction with no compliance issue
    ///
    /// # Arguments
    /// * `sender_full_name` - Sending client
    /// * `beneficiary_full_name` - Receiving client
    /// * `amount` - Transferred amount (not validated)
    pub fn new(sender_full_name: String, beneficiary_full_name: String, amount: f64) -> Self {
        Self {
            amount,
            sender_full_name,
            beneficiary_full_name,
            issue_id: None,
            issue_solved: true,
            issue_message: None,
            extra: Map::new(),
        }
    }

    /// Attach a compliance issue (builder pattern)
    pub fn with_issue(mut self, issue_id: IssueId, solved: bool) -> Self {
        self.issue_id = Some(issue_id);
        self.issue_solved = solved;
        self
    }

    /// Override the solved flag without attaching an issue id
    ///
    /// Models records flagged unsolved that never received an id.
    pub fn with_issue_solved(mut self, solved: bool) -> Self {
        self.issue_solved = solved;
        self
    }

    /// Attach a compliance issue message (builder pattern)
    pub fn with_issue_message(mut self, message: String) -> Self {
        self.issue_message = Some(message);
        self
    }

    /// Attach an additional source key (builder pattern)
    pub fn with_extra(mut self, key: String, value: Value) -> Self {
        self.extra.insert(key, value);
        self
    }

    // Getters

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn sender_full_name(&self) -> &str {
        &self.sender_full_name
    }

    pub fn beneficiary_full_name(&self) -> &str {
        &self.beneficiary_full_name
    }

    pub fn issue_id(&self) -> Option<IssueId> {
        self.issue_id
    }

    pub fn issue_solved(&self) -> bool {
        self.issue_solved
    }

    pub fn issue_message(&self) -> Option<&str> {
        self.issue_message.as_deref()
    }

    /// Additional keys of the source record
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// True when the client is either the sender or the beneficiary
    ///
    /// Exact, case-sensitive comparison.
    pub fn involves(&self, client_full_name: &str) -> bool {
        self.sender_full_name == client_full_name || self.beneficiary_full_name == client_full_name
    }

    /// True when the transaction carries an unsolved compliance issue
    pub fn has_open_issue(&self) -> bool {
        !self.issue_solved
    }
}
