//! Transaction report CLI
//!
//! Loads a transactions document and prints every reporting query.

mod report;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use transaction_report_core::TransactionStore;

#[derive(Parser, Debug)]
#[command(name = "transaction-report")]
#[command(about = "Summarise a JSON document of money transfers", long_about = None)]
struct Args {
    /// Path to the transactions document (JSON array)
    #[arg(value_name = "PATH", default_value = "transactions.json")]
    transactions_filepath: PathBuf,

    /// Client whose total sent amount is reported
    #[arg(long, default_value = "Aunt Polly")]
    sender: String,

    /// Client checked for open compliance issues
    #[arg(long, default_value = "Aunt Polly")]
    client: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = TransactionStore::from_path(&args.transactions_filepath).with_context(|| {
        format!(
            "could not load transactions from {}",
            args.transactions_filepath.display()
        )
    })?;

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &store, &args.sender, &args.client)
        .context("failed to write report")?;

    Ok(())
}
