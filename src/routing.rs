//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    AppState, Error, endpoints,
    spender::{create_spender_endpoint, list_spenders_endpoint},
    stores::{SpenderStore, TransactionStore},
    transaction::{
        create_transaction_endpoint, edit_transaction_endpoint, get_spender_summary_endpoint,
        get_spender_transactions_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S, T>(state: AppState<S, T>) -> Router
where
    S: SpenderStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::SPENDERS,
            get(list_spenders_endpoint::<S>).post(create_spender_endpoint::<S>),
        )
        .route(
            endpoints::SPENDER_TRANSACTIONS,
            get(get_spender_transactions_endpoint::<T>),
        )
        .route(
            endpoints::SPENDER_TRANSACTIONS_SUMMARY,
            get(get_spender_summary_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(endpoints::TRANSACTION, put(edit_transaction_endpoint::<T>))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
