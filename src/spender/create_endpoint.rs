//! Creates spenders when the feature is switched on.

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    AppState, Error, FeatureFlags, NewSpender, Spender,
    stores::{SpenderStore, TransactionStore},
};

/// The state needed to create a spender.
#[derive(Debug, Clone)]
pub struct CreateSpenderState<S>
where
    S: SpenderStore + Send + Sync,
{
    /// The store for managing [spenders](crate::Spender).
    pub spender_store: S,
    /// Decides whether new spenders may be created at all.
    pub feature_flags: FeatureFlags,
}

impl<S, T> FromRef<AppState<S, T>> for CreateSpenderState<S>
where
    S: SpenderStore + Clone + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<S, T>) -> Self {
        Self {
            spender_store: state.spender_store.clone(),
            feature_flags: state.config.feature_flags,
        }
    }
}

/// A route handler for creating a new spender.
///
/// Responds with 403 Forbidden when the `enable_create_spender` flag is off,
/// whether or not the body could be parsed. The store is not called.
pub async fn create_spender_endpoint<S>(
    State(mut state): State<CreateSpenderState<S>>,
    body: Result<Json<NewSpender>, JsonRejection>,
) -> Result<(StatusCode, Json<Spender>), Error>
where
    S: SpenderStore + Send + Sync,
{
    if !state.feature_flags.enable_create_spender {
        return Err(Error::CreateSpenderDisabled);
    }

    let Json(new_spender) = body.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;

    let spender = state.spender_store.create(new_spender)?;
    tracing::info!("Created spender {} ({})", spender.id, spender.name);

    Ok((StatusCode::CREATED, Json(spender)))
}
