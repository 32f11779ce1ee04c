//! Lists spenders.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error, Spender,
    stores::{SpenderStore, TransactionStore},
};

/// The state needed to list spenders.
#[derive(Debug, Clone)]
pub struct ListSpendersState<S>
where
    S: SpenderStore + Send + Sync,
{
    /// The store for managing [spenders](crate::Spender).
    pub spender_store: S,
}

impl<S, T> FromRef<AppState<S, T>> for ListSpendersState<S>
where
    S: SpenderStore + Clone + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<S, T>) -> Self {
        Self {
            spender_store: state.spender_store.clone(),
        }
    }
}

/// A route handler for getting every spender.
pub async fn list_spenders_endpoint<S>(
    State(state): State<ListSpendersState<S>>,
) -> Result<Json<Vec<Spender>>, Error>
where
    S: SpenderStore + Send + Sync,
{
    state.spender_store.get_all().map(Json)
}
