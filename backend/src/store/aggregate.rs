//! Aggregation helpers shared by the store queries
//!
//! - Per-sender totals in first-seen order
//! - Descending amount ordering for ranking

use crate::models::transaction::Transaction;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Total amount sent by one client
#[derive(Debug, Clone, PartialEq)]
pub struct SenderTotal<'a> {
    /// Sender full name
    pub sender_full_name: &'a str,

    /// Sum of all amounts sent by this client
    pub total_amount: f64,

    /// Number of transactions sent by this client
    pub transaction_count: usize,
}

/// Sum amounts per sender, preserving the order senders first appear in
pub fn sender_totals<'a, I>(transactions: I) -> Vec<SenderTotal<'a>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<SenderTotal<'a>> = Vec::new();

    for tx in transactions {
        let sender = tx.sender_full_name();
        match position.get(sender) {
            Some(&idx) => {
                totals[idx].total_amount += tx.amount();
                totals[idx].transaction_count += 1;
            }
            None => {
                position.insert(sender, totals.len());
                totals.push(SenderTotal {
                    sender_full_name: sender,
                    total_amount: tx.amount(),
                    transaction_count: 1,
                });
            }
        }
    }

    totals
}

/// Pick the largest total; the earliest entry wins ties
pub fn largest_total<'a>(totals: Vec<SenderTotal<'a>>) -> Option<SenderTotal<'a>> {
    totals.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.total_amount <= current.total_amount => Some(current),
        _ => Some(candidate),
    })
}

/// Ordering that places larger amounts first
///
/// Uses `f64::total_cmp`, so the order is total even for NaN.
pub fn by_amount_desc(a: &Transaction, b: &Transaction) -> Ordering {
    b.amount().total_cmp(&a.amount())
}
