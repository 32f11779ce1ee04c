//! Totals of a spender's whole transaction history.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::parse_database_id,
    stores::TransactionStore,
    transaction::{Summary, TransactionState, get_spender_summary},
};

/// The response body for a spender's summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpenderSummary {
    /// The totals of every transaction the spender has.
    pub summary: Summary,
}

/// A route handler for summarising every transaction of a spender.
pub async fn get_spender_summary_endpoint<T>(
    State(state): State<TransactionState<T>>,
    spender_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SpenderSummary>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let Path(spender_id) =
        spender_id.map_err(|rejection| Error::InvalidPath(rejection.body_text()))?;
    let spender_id =
        parse_database_id(&spender_id).ok_or(Error::InvalidSpenderId(spender_id))?;

    let summary = get_spender_summary(spender_id, &state.transaction_store).inspect_err(|error| {
        tracing::warn!("Could not summarise transactions for spender {spender_id}: {error}")
    })?;

    Ok(Json(SpenderSummary { summary }))
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        TransactionKind,
        endpoints::{self, format_endpoint},
        test_utils::StubTransactionStore,
        transaction::TransactionState,
    };

    use super::get_spender_summary_endpoint;

    fn get_test_server(store: StubTransactionStore) -> TestServer {
        let app = Router::new()
            .route(
                endpoints::SPENDER_TRANSACTIONS_SUMMARY,
                get(get_spender_summary_endpoint::<StubTransactionStore>),
            )
            .with_state(TransactionState {
                transaction_store: store,
            });

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn get_spender_summary_succeeds() {
        let store = StubTransactionStore {
            income_total: 300.0,
            expense_total: 300.0,
            ..Default::default()
        };
        let server = get_test_server(store.clone());

        let response = server
            .get(&format_endpoint(endpoints::SPENDER_TRANSACTIONS_SUMMARY, 1))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "summary": {
                    "total_income": 300.0,
                    "total_expenses": 300.0,
                    "current_balance": 0.0
                }
            })
        );
        assert_eq!(
            *store.sum_calls.lock().unwrap(),
            vec![(1, TransactionKind::Income), (1, TransactionKind::Expense)]
        );
    }

    #[tokio::test]
    async fn non_numeric_spender_id_is_bad_request() {
        let store = StubTransactionStore::default();
        let server = get_test_server(store.clone());

        let response = server
            .get(&format_endpoint(endpoints::SPENDER_TRANSACTIONS_SUMMARY, "one"))
            .await;

        response.assert_status_bad_request();
        assert_eq!(store.call_count(), 0, "the store should not be called");
    }

    #[tokio::test]
    async fn undecodable_spender_id_is_bad_request_with_json_message() {
        let store = StubTransactionStore::default();
        let server = get_test_server(store.clone());

        let response = server
            .get(&format_endpoint(endpoints::SPENDER_TRANSACTIONS_SUMMARY, "%FF"))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.header("content-type"), "application/json");
        assert!(response.json::<Value>().get("message").is_some());
        assert_eq!(store.call_count(), 0, "the store should not be called");
    }

    #[tokio::test]
    async fn store_failure_is_internal_server_error() {
        let server = get_test_server(StubTransactionStore::failing());

        let response = server
            .get(&format_endpoint(endpoints::SPENDER_TRANSACTIONS_SUMMARY, 1))
            .await;

        response.assert_status_internal_server_error();
        assert!(response.json::<Value>().get("summary").is_none());
    }
}
