//! Console rendering of the store queries

use std::io::{self, Write};
use transaction_report_core::{Transaction, TransactionStore};

const RULE: &str = "----------------------------------------------------------------";

/// Write every query result to `out`, one section per query
pub fn write_report<W: Write>(
    out: &mut W,
    store: &TransactionStore,
    sender: &str,
    client: &str,
) -> io::Result<()> {
    writeln!(out, "Total amount: {}", store.total_amount())?;
    writeln!(
        out,
        "Total amount sent by {}: {}",
        sender,
        store.total_amount_sent_by(sender)
    )?;
    match store.max_amount() {
        Some(max) => writeln!(out, "Max transaction amount: {}", max)?,
        None => writeln!(out, "Max transaction amount: n/a")?,
    }
    writeln!(out, "Unique clients: {}", store.count_unique_clients())?;
    writeln!(
        out,
        "Open compliance issues for {}: {}",
        client,
        if store.has_open_compliance_issues(client) {
            "Yes"
        } else {
            "No"
        }
    )?;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Transactions by beneficiary:")?;
    let groups = store.transactions_by_beneficiary();
    let mut beneficiaries: Vec<&&str> = groups.keys().collect();
    beneficiaries.sort();
    for beneficiary in beneficiaries {
        writeln!(out, "Beneficiary: {}", beneficiary)?;
        for tx in &groups[*beneficiary] {
            writeln!(out, "  {}", render(tx)?)?;
        }
    }

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Unsolved issue ids:")?;
    for id in store.unsolved_issue_ids() {
        writeln!(out, "  {}", id)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Solved issue messages:")?;
    for message in store.solved_issue_messages() {
        writeln!(out, "  {}", message)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Top 3 transactions by amount:")?;
    for tx in store.top3_by_amount() {
        writeln!(out, "  {}", render(tx)?)?;
    }

    writeln!(out, "{}", RULE)?;
    match store.top_sender() {
        Some(top) => {
            writeln!(
                out,
                "Top sender: {} ({} across {} transactions)",
                top.sender_full_name, top.total_amount, top.transaction_count
            )?;
            for tx in store.transactions_sent_by(top.sender_full_name) {
                writeln!(out, "  {}", render(tx)?)?;
            }
        }
        None => writeln!(out, "Top sender: n/a")?,
    }

    Ok(())
}

fn render(tx: &Transaction) -> io::Result<String> {
    serde_json::to_string(tx).map_err(io::Error::from)
}
