//! Lists every transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionState},
};

/// A route handler for getting every transaction of every spender.
pub async fn list_transactions_endpoint<T>(
    State(state): State<TransactionState<T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    state.transaction_store.get_all().map(Json)
}
