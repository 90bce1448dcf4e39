use axum::{Json, extract::State};

use crate::{
    Error,
    transaction::{Transaction, TransactionStore},
};

/// A route handler for listing every transaction in the order they were created.
///
/// Responds with an empty JSON array when there are no transactions.
pub async fn list_transactions_endpoint(
    State(store): State<TransactionStore>,
) -> Result<Json<Vec<Transaction>>, Error> {
    store.list().map(Json)
}
