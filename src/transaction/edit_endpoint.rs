//! Updates transactions.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::parse_database_id,
    stores::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionState},
};

/// A route handler for replacing every field of a transaction except its ID.
///
/// Responds with 404 Not Found if there is no transaction with the ID.
pub async fn edit_transaction_endpoint<T>(
    State(mut state): State<TransactionState<T>>,
    transaction_id: Result<Path<String>, PathRejection>,
    body: Result<Json<TransactionBuilder>, JsonRejection>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let Path(transaction_id) =
        transaction_id.map_err(|rejection| Error::InvalidPath(rejection.body_text()))?;
    let transaction_id = parse_database_id(&transaction_id)
        .ok_or(Error::InvalidTransactionId(transaction_id))?;
    let Json(builder) = body.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;

    match state.transaction_store.update(transaction_id, builder.clone())? {
        0 => Err(Error::UpdateMissingTransaction),
        _ => {
            tracing::info!("Updated transaction {transaction_id}");
            Ok(Json(builder.finalise(transaction_id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::put};
    use axum_test::TestServer;
    use time::macros::datetime;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::StubTransactionStore,
        transaction::{Transaction, TransactionBuilder, TransactionState},
    };

    use super::edit_transaction_endpoint;

    fn get_test_server(store: StubTransactionStore) -> TestServer {
        let app = Router::new()
            .route(
                endpoints::TRANSACTION,
                put(edit_transaction_endpoint::<StubTransactionStore>),
            )
            .with_state(TransactionState {
                transaction_store: store,
            });

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn replacement() -> TransactionBuilder {
        Transaction::build(250.0, datetime!(2024-05-12 9:00 UTC), "income", 2)
            .category("Salary")
            .note("May")
    }

    #[tokio::test]
    async fn update_transaction_succeeds() {
        let store = StubTransactionStore {
            rows_affected: 1,
            ..Default::default()
        };
        let server = get_test_server(store.clone());

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, 5))
            .json(&replacement())
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Transaction>(), replacement().finalise(5));
        assert_eq!(*store.writes.lock().unwrap(), vec![(Some(5), replacement())]);
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let server = get_test_server(StubTransactionStore::default());

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, 5))
            .json(&replacement())
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let store = StubTransactionStore::default();
        let server = get_test_server(store.clone());

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, "five"))
            .json(&replacement())
            .await;

        response.assert_status_bad_request();
        assert_eq!(store.call_count(), 0, "the store should not be called");
    }

    #[tokio::test]
    async fn store_failure_is_internal_server_error() {
        let server = get_test_server(StubTransactionStore::failing());

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, 5))
            .json(&replacement())
            .await;

        response.assert_status_internal_server_error();
    }
}
