//! Defines the core data models for transactions and how a new transaction is
//! decoded from a request body.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only created by [TransactionStore::create](crate::TransactionStore::create),
/// which assigns the ID. To describe a transaction that has not been stored yet, use
/// [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique for the lifetime of the server process.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// The sign is not constrained, clients may encode income and expenses
    /// through `type`, the sign, or both.
    pub amount: f64,
    /// A free-form tag such as "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// When the transaction happened. No particular format is enforced.
    pub date: String,
}

impl Transaction {
    /// Describe a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(description: &str, amount: f64, kind: &str, date: &str) -> NewTransaction {
        NewTransaction {
            description: description.to_owned(),
            amount,
            kind: kind.to_owned(),
            date: date.to_owned(),
        }
    }
}

/// The fields of a transaction that a client provides when creating one.
///
/// All four fields are required. The server assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A free-form tag such as "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// When the transaction happened.
    pub date: String,
}

impl NewTransaction {
    /// Decode a new transaction from a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidJson] if `body` is not syntactically valid JSON, or
    /// [Error::BadRequest] if it is valid JSON but a field is missing or has the wrong type.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|error| match error.classify() {
            Category::Syntax | Category::Eof => Error::InvalidJson,
            Category::Data | Category::Io => Error::BadRequest(error.to_string()),
        })
    }

    /// Attach `id` to create the stored [Transaction].
    pub(super) fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
        }
    }
}
