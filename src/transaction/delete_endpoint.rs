use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::{
    Error,
    transaction::{TransactionId, TransactionStore},
};

/// A route handler for deleting a transaction, responds with 204 and an empty body.
///
/// Responds with 404 if no transaction has the ID. The ID is not freed for reuse.
pub async fn delete_transaction_endpoint(
    State(store): State<TransactionStore>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Result<StatusCode, Error> {
    let Path(transaction_id) = transaction_id.map_err(|_| Error::TransactionNotFound)?;

    store.delete(transaction_id)?;
    tracing::info!("Deleted transaction {transaction_id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        Transaction, endpoints,
        endpoints::format_endpoint,
        test_utils::{assert_cors_headers, create_transaction, get_test_server},
    };

    #[tokio::test]
    async fn deletes_only_the_requested_transaction() {
        let (server, _assets) = get_test_server();
        let first = create_transaction(&server, "coffee", -3.5).await;
        let second = create_transaction(&server, "salary", 2500.0).await;
        let third = create_transaction(&server, "rent", -800.0).await;

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, second))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_cors_headers(&response);
        assert!(response.as_bytes().is_empty());

        let ids: Vec<i64> = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>()
            .iter()
            .map(|transaction| transaction.id)
            .collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_not_found() {
        let (server, _assets) = get_test_server();
        let id = create_transaction(&server, "coffee", -3.5).await;

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 999_999))
            .await;

        response.assert_status_not_found();
        assert_cors_headers(&response);

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, id);
    }

    #[tokio::test]
    async fn deleted_transaction_is_gone() {
        let (server, _assets) = get_test_server();
        let id = create_transaction(&server, "coffee", -3.5).await;

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(&format_endpoint(endpoints::TRANSACTION, id))
            .await
            .assert_status_not_found();
        server
            .delete(&format_endpoint(endpoints::TRANSACTION, id))
            .await
            .assert_status_not_found();
    }
}
