//! Loader - JSON document to typed transactions
//!
//! Turns a JSON document into an ordered `Vec<Transaction>`.
//!
//! Validation is eager: every record is deserialized at load time and the
//! first record with a missing or mistyped required field fails the whole
//! load. No partially loaded dataset is ever returned.

use crate::models::transaction::Transaction;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a transaction document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read transaction file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Transaction document is not well-formed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Transaction document must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A record whose required field is missing or has the wrong type
#[derive(Debug, Error)]
#[error("Invalid transaction record at index {index}: {source}")]
pub struct FieldError {
    /// Zero-based position of the offending record
    pub index: usize,

    #[source]
    pub source: serde_json::Error,
}

/// Parse a JSON document held in memory
pub fn parse_str(json: &str) -> Result<Vec<Transaction>, LoadError> {
    let document: Value = serde_json::from_str(json).map_err(LoadError::Malformed)?;
    parse_document(document)
}

/// Parse a JSON document from any reader
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let document: Value = serde_json::from_reader(reader).map_err(LoadError::Malformed)?;
    parse_document(document)
}

/// Read and parse a JSON document from disk
pub fn load_path(path: &Path) -> Result<Vec<Transaction>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

/// Convert an already parsed JSON document into transactions
///
/// The root must be an array; each element must deserialize into a
/// [`Transaction`]. Order is preserved.
pub fn parse_document(document: Value) -> Result<Vec<Transaction>, LoadError> {
    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    let transactions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| FieldError { index, source })
        })
        .collect::<Result<Vec<Transaction>, FieldError>>()?;

    tracing::debug!(count = transactions.len(), "parsed transaction document");
    Ok(transactions)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
