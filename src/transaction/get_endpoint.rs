use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    transaction::{Transaction, TransactionId, TransactionStore},
};

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 if no transaction has the ID, including when the ID is not an integer.
pub async fn get_transaction_endpoint(
    State(store): State<TransactionStore>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = transaction_id.map_err(|_| Error::TransactionNotFound)?;

    store.get(transaction_id).map(Json)
}
