//! Spendtrack is a small REST API for tracking what spenders earn and spend.
//!
//! The API records spenders and their income/expense transactions, and
//! summarises each spender's transactions into total income, total expenses
//! and a current balance. A spender's transaction history can be paged
//! through with `page` and `limit` query parameters.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod config;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod pagination;
mod routing;
mod spender;
mod transaction;

pub mod stores;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{AppConfig, FeatureFlags};
pub use database_id::{DatabaseId, SpenderId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{Pagination, PaginationConfig};
pub use routing::build_router;
pub use spender::{NewSpender, Spender};
pub use transaction::{Summary, Transaction, TransactionBuilder, TransactionKind};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The spender ID in the request path is not a positive integer.
    #[error("invalid spender ID \"{0}\"")]
    InvalidSpenderId(String),

    /// The transaction ID in the request path is not a positive integer.
    #[error("invalid transaction ID \"{0}\"")]
    InvalidTransactionId(String),

    /// The `page` query parameter is not a positive integer.
    #[error("invalid page \"{0}\", page must be a positive integer")]
    InvalidPage(String),

    /// The `limit` query parameter is not a positive integer.
    #[error("invalid limit \"{0}\", limit must be a positive integer")]
    InvalidLimit(String),

    /// The request path could not be decoded.
    #[error("bad request path: {0}")]
    InvalidPath(String),

    /// The query string could not be decoded, e.g. a parameter is repeated.
    #[error("bad query string: {0}")]
    InvalidQuery(String),

    /// The request body could not be parsed, or a required field is missing.
    ///
    /// Callers should pass in the parser's message.
    #[error("bad request body: {0}")]
    InvalidRequestBody(String),

    /// The spender ID used to create or update a transaction did not match a
    /// spender in the database.
    #[error("the spender ID {0} does not refer to a valid spender")]
    InvalidSpender(SpenderId),

    /// Spender creation is switched off by the `enable_create_spender` feature flag.
    #[error("create new spender feature is disabled")]
    CreateSpenderDisabled,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error should only be logged on the server. Clients get a generic
    /// internal server error instead.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// A description of what went wrong that is safe to show the client.
    pub message: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidSpenderId(_)
            | Error::InvalidTransactionId(_)
            | Error::InvalidPage(_)
            | Error::InvalidLimit(_)
            | Error::InvalidPath(_)
            | Error::InvalidQuery(_)
            | Error::InvalidRequestBody(_)
            | Error::InvalidSpender(_) => StatusCode::BAD_REQUEST,
            Error::CreateSpenderDisabled => StatusCode::FORBIDDEN,
            Error::NotFound | Error::UpdateMissingTransaction => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
