//! Defines the transaction store trait.

use crate::{
    Error, Transaction, TransactionBuilder, TransactionKind,
    database_id::{SpenderId, TransactionId},
};

/// The number of rows changed by a write.
pub type RowsAffected = usize;

/// Handles the creation, retrieval and aggregation of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Replace every field of the transaction `id` except the ID itself.
    ///
    /// Returns the number of rows that were changed, so zero means there is
    /// no transaction with that ID.
    fn update(&mut self, id: TransactionId, builder: TransactionBuilder)
    -> Result<RowsAffected, Error>;

    /// Retrieve every transaction in the store.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve one page of a spender's transactions as defined by `query`.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Sum the amounts of every transaction of `kind` that belongs to `spender_id`.
    ///
    /// Implementers must return zero, not an error, when nothing matches.
    fn sum_amounts(&self, spender_id: SpenderId, kind: TransactionKind) -> Result<f64, Error>;
}

/// Defines how transactions should be fetched from [TransactionStore::get_query].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Only include transactions that belong to this spender.
    pub spender_id: SpenderId,
    /// Selects up to `limit` transactions.
    pub limit: i64,
    /// Skip this many transactions before selecting.
    pub offset: i64,
}
