//! The state shared by the transaction route handlers.

use axum::extract::FromRef;

use crate::{
    AppState,
    stores::{SpenderStore, TransactionStore},
};

/// The state needed to create, update, list or summarise transactions.
#[derive(Debug, Clone)]
pub struct TransactionState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [transactions](crate::Transaction).
    pub transaction_store: T,
}

impl<S, T> FromRef<AppState<S, T>> for TransactionState<T>
where
    S: SpenderStore + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S, T>) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}
