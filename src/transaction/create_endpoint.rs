use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::{NewTransaction, TransactionId, TransactionStore},
};

/// The message sent along with the ID of a newly created transaction.
pub const CREATED_MESSAGE: &str = "Transaction created successfully";

/// The response body for a successfully created transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreated {
    /// The ID the store assigned to the new transaction.
    pub id: TransactionId,
    /// A human readable confirmation.
    pub message: String,
}

/// A route handler for creating a new transaction from a JSON body.
///
/// The body is decoded before an ID is allocated, so a rejected request never
/// consumes an ID.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<TransactionCreated>), Error> {
    let new_transaction = NewTransaction::from_json(&body).inspect_err(|error| {
        tracing::debug!("Rejected new transaction: {error}");
    })?;

    let transaction = store.create(new_transaction)?;
    tracing::info!("Created transaction {}", transaction.id);

    Ok((
        StatusCode::CREATED,
        Json(TransactionCreated {
            id: transaction.id,
            message: CREATED_MESSAGE.to_owned(),
        }),
    ))
}
