//! Creates transactions.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionState},
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the new transaction, including its ID.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<TransactionState<T>>,
    body: Result<Json<TransactionBuilder>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    T: TransactionStore + Send + Sync,
{
    let Json(builder) = body.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;

    let transaction = state.transaction_store.create(builder)?;
    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
