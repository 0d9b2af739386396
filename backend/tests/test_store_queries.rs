//! Store Query Tests
//!
//! Exercises every reporting query against small hand-built datasets.

use transaction_report_core::{Transaction, TransactionStore};

// ============================================================================
// Test Helpers
// ============================================================================

fn tx(sender: &str, beneficiary: &str, amount: f64) -> Transaction {
    Transaction::new(sender.to_string(), beneficiary.to_string(), amount)
}

/// Two clients, one solved transfer and one open issue
fn two_client_store() -> TransactionStore {
    TransactionStore::new(vec![
        tx("A", "B", 100.0).with_issue_solved(true),
        tx("B", "A", 50.0).with_issue(7, false),
    ])
}

/// Dataset shaped like the production transactions file
fn sample_store() -> TransactionStore {
    TransactionStore::new(vec![
        tx("Tom Shelby", "Alfie Solomons", 430.2)
            .with_issue(1, false)
            .with_issue_message("Looks like money laundering".to_string()),
        tx("Tom Shelby", "Arthur Shelby", 150.2)
            .with_issue(2, true)
            .with_issue_message("Never gonna give you up".to_string()),
        tx("Aunt Polly", "Aberama Gold", 67.0),
        tx("Aunt Polly", "Alfie Solomons", 985.0),
        tx("Arthur Shelby", "Ben Younger", 97.66)
            .with_issue(3, true)
            .with_issue_message("Never gonna let you down".to_string()),
        tx("Grace Burgess", "Michael Gray", 666.0)
            .with_issue(54, false)
            .with_issue_message("Something's fishy".to_string()),
        tx("Grace Burgess", "Michael Gray", 666.0),
        tx("Tom Shelby", "Alfie Solomons", 1000.0)
            .with_issue(1, false)
            .with_issue_message("Looks like money laundering".to_string()),
    ])
}

// ============================================================================
// Example datasets
// ============================================================================

#[test]
fn test_two_client_example() {
    let store = two_client_store();

    assert_eq!(store.total_amount(), 150.0);
    assert_eq!(store.count_unique_clients(), 2);
    assert!(store.has_open_compliance_issues("A")); // A is beneficiary of the open one
    assert!(store.has_open_compliance_issues("B"));
    assert_eq!(store.unsolved_issue_ids().into_iter().collect::<Vec<_>>(), vec![7]);
    assert!(store.solved_issue_messages().is_empty());
}

#[test]
fn test_top3_ties_keep_document_order() {
    let store = TransactionStore::new(vec![
        tx("first", "X", 30.0),
        tx("second", "X", 30.0),
        tx("third", "X", 10.0),
    ]);

    let top: Vec<&str> = store
        .top3_by_amount()
        .iter()
        .map(|t| t.sender_full_name())
        .collect();

    assert_eq!(top, vec!["first", "second", "third"]);
}

// ============================================================================
// Individual queries
// ============================================================================

#[test]
fn test_total_amount() {
    let total = sample_store().total_amount();
    assert!((total - 4062.06).abs() < 1e-9);
}

#[test]
fn test_total_amount_sent_by() {
    let store = sample_store();

    assert!((store.total_amount_sent_by("Tom Shelby") - 1580.4).abs() < 1e-9);
    assert_eq!(store.total_amount_sent_by("Aunt Polly"), 1052.0);
    assert_eq!(store.total_amount_sent_by("aunt polly"), 0.0);
    assert_eq!(store.total_amount_sent_by("Michael Gray"), 0.0); // Only a beneficiary
}

#[test]
fn test_empty_sums_are_positive_zero() {
    let empty = TransactionStore::default();
    assert!(empty.total_amount().is_sign_positive());
    assert_eq!(format!("{}", empty.total_amount()), "0");

    let store = sample_store();
    assert!(store.total_amount_sent_by("Nobody").is_sign_positive());
    assert_eq!(format!("{}", store.total_amount_sent_by("Nobody")), "0");
}

#[test]
fn test_max_amount() {
    assert_eq!(sample_store().max_amount(), Some(1000.0));
    assert_eq!(TransactionStore::default().max_amount(), None);
}

#[test]
fn test_count_unique_clients() {
    // Tom, Alfie, Arthur, Polly, Aberama, Ben, Grace, Michael
    assert_eq!(sample_store().count_unique_clients(), 8);
}

#[test]
fn test_has_open_compliance_issues() {
    let store = sample_store();

    assert!(store.has_open_compliance_issues("Tom Shelby"));
    assert!(store.has_open_compliance_issues("Alfie Solomons"));
    assert!(store.has_open_compliance_issues("Michael Gray"));
    assert!(!store.has_open_compliance_issues("Aunt Polly"));
    assert!(!store.has_open_compliance_issues("Arthur Shelby"));
    assert!(!store.has_open_compliance_issues("Nobody"));
}

#[test]
fn test_transactions_by_beneficiary() {
    let store = sample_store();
    let groups = store.transactions_by_beneficiary();

    assert_eq!(groups.len(), 5);

    let alfie: Vec<f64> = groups["Alfie Solomons"].iter().map(|t| t.amount()).collect();
    assert_eq!(alfie, vec![430.2, 985.0, 1000.0]);

    assert_eq!(groups["Michael Gray"].len(), 2);
    assert_eq!(groups["Ben Younger"].len(), 1);
    assert!(!groups.contains_key("Tom Shelby"));
}

#[test]
fn test_grouped_records_alias_store_records() {
    let store = sample_store();
    let groups = store.transactions_by_beneficiary();

    let first = groups["Alfie Solomons"][0];
    assert!(std::ptr::eq(first, &store.transactions()[0]));
}

#[test]
fn test_unsolved_issue_ids_are_distinct() {
    let ids: Vec<i64> = sample_store().unsolved_issue_ids().into_iter().collect();
    assert_eq!(ids, vec![1, 54]);
}

#[test]
fn test_solved_issue_messages_in_order() {
    let store = sample_store();
    assert_eq!(
        store.solved_issue_messages(),
        vec!["Never gonna give you up", "Never gonna let you down"]
    );
}

#[test]
fn test_solved_issue_messages_keep_duplicates() {
    let store = TransactionStore::new(vec![
        tx("A", "B", 1.0).with_issue(1, true).with_issue_message("ok".to_string()),
        tx("A", "B", 1.0).with_issue(2, true).with_issue_message("ok".to_string()),
    ]);

    assert_eq!(store.solved_issue_messages(), vec!["ok", "ok"]);
}

#[test]
fn test_top3_by_amount() {
    let store = sample_store();
    let amounts: Vec<f64> = store.top3_by_amount().iter().map(|t| t.amount()).collect();

    assert_eq!(amounts, vec![1000.0, 985.0, 666.0]);
}

#[test]
fn test_top3_with_fewer_than_three() {
    let store = TransactionStore::new(vec![tx("A", "B", 5.0), tx("A", "B", 9.0)]);
    let amounts: Vec<f64> = store.top3_by_amount().iter().map(|t| t.amount()).collect();

    assert_eq!(amounts, vec![9.0, 5.0]);
}

#[test]
fn test_top_sender() {
    let store = sample_store();
    let top = store.top_sender().unwrap();

    assert_eq!(top.sender_full_name, "Tom Shelby");
    assert!((top.total_amount - 1580.4).abs() < 1e-9);
    assert_eq!(top.transaction_count, 3);
}

#[test]
fn test_top_sender_is_not_simply_first_record() {
    let store = TransactionStore::new(vec![tx("small", "X", 1.0), tx("big", "X", 100.0)]);

    assert_eq!(store.top_sender().unwrap().sender_full_name, "big");
}

#[test]
fn test_top_sender_tie_prefers_first_seen() {
    let store = TransactionStore::new(vec![
        tx("A", "X", 10.0),
        tx("B", "X", 20.0),
        tx("A", "X", 10.0),
    ]);

    assert_eq!(store.top_sender().unwrap().sender_full_name, "A");
}

#[test]
fn test_top_sender_empty() {
    assert!(TransactionStore::default().top_sender().is_none());
}

#[test]
fn test_transactions_sent_by() {
    let store = sample_store();
    let sent = store.transactions_sent_by("Aunt Polly");

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].beneficiary_full_name(), "Aberama Gold");
    assert_eq!(sent[1].beneficiary_full_name(), "Alfie Solomons");
}

#[test]
fn test_sender_totals_cover_every_sender() {
    let store = sample_store();
    let names: Vec<&str> = store
        .sender_totals()
        .iter()
        .map(|t| t.sender_full_name)
        .collect();

    assert_eq!(
        names,
        vec!["Tom Shelby", "Aunt Polly", "Arthur Shelby", "Grace Burgess"]
    );
}

#[test]
fn test_store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransactionStore>();
}
