//! Implements a struct that holds the state of the REST server.

use crate::{
    AppConfig,
    stores::{SpenderStore, TransactionStore},
};

/// The state of the REST server.
///
/// One instance is built at start up and cloned into each request handler,
/// the stores share a single database connection.
#[derive(Debug, Clone)]
pub struct AppState<S, T>
where
    S: SpenderStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// The configuration read at start up.
    pub config: AppConfig,
    /// The store for managing [spenders](crate::Spender).
    pub spender_store: S,
    /// The store for managing [transactions](crate::Transaction).
    pub transaction_store: T,
}

impl<S, T> AppState<S, T>
where
    S: SpenderStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(config: AppConfig, spender_store: S, transaction_store: T) -> Self {
        Self {
            config,
            spender_store,
            transaction_store,
        }
    }
}
