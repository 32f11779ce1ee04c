//! Pages through a spender's transaction history.

use axum::{
    Json,
    extract::{
        FromRef, Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    database_id::parse_database_id,
    pagination::{PageQuery, PageRequest, Pagination, PaginationConfig},
    stores::{SpenderStore, TransactionQuery, TransactionStore},
    transaction::{Summary, Transaction},
};

/// The state needed to page through a spender's transactions.
#[derive(Debug, Clone)]
pub struct SpenderTransactionsState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [transactions](crate::Transaction).
    pub transaction_store: T,
    /// The default and maximum page sizes.
    pub pagination_config: PaginationConfig,
}

impl<S, T> FromRef<AppState<S, T>> for SpenderTransactionsState<T>
where
    S: SpenderStore + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S, T>) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            pagination_config: state.config.pagination.clone(),
        }
    }
}

/// One page of a spender's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpenderTransactions {
    /// The transactions on this page, oldest first.
    ///
    /// The misspelt key is part of the published API, clients depend on it.
    #[serde(rename = "transections")]
    pub transactions: Vec<Transaction>,
    /// The totals of the transactions on this page only.
    ///
    /// Use [get_spender_summary](crate::transaction::get_spender_summary) for
    /// the totals of the whole history.
    pub summary: Summary,
    /// Which page this is.
    pub pagination: Pagination,
}

/// A route handler for getting a page of a spender's transactions.
///
/// The `page` and `limit` query parameters default to the values in
/// [PaginationConfig].
pub async fn get_spender_transactions_endpoint<T>(
    State(state): State<SpenderTransactionsState<T>>,
    spender_id: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<SpenderTransactions>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let Path(spender_id) =
        spender_id.map_err(|rejection| Error::InvalidPath(rejection.body_text()))?;
    let Query(query) = query.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;

    get_spender_transactions(
        &spender_id,
        &query,
        &state.pagination_config,
        &state.transaction_store,
    )
    .map(Json)
    .inspect_err(|error| {
        tracing::warn!("Could not get transactions for spender {spender_id}: {error}")
    })
}

/// Fetch a page of the transactions belonging to `spender_id` and summarise it.
///
/// The spender ID and page parameters are checked before the store is used.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidSpenderId] if `spender_id` is not a positive integer,
/// - [Error::InvalidPage] or [Error::InvalidLimit] if a page parameter is malformed,
/// - or any error from the store.
pub fn get_spender_transactions<T>(
    spender_id: &str,
    query: &PageQuery,
    pagination_config: &PaginationConfig,
    store: &T,
) -> Result<SpenderTransactions, Error>
where
    T: TransactionStore,
{
    let spender_id = parse_database_id(spender_id)
        .ok_or_else(|| Error::InvalidSpenderId(spender_id.to_owned()))?;
    let page = PageRequest::parse(query, pagination_config)?;

    let transactions = store.get_query(TransactionQuery {
        spender_id,
        limit: page.limit,
        offset: page.offset(),
    })?;

    tracing::debug!(
        "Fetched {} transactions for spender {spender_id} on page {}",
        transactions.len(),
        page.page
    );

    let summary = Summary::from_transactions(&transactions);

    Ok(SpenderTransactions {
        transactions,
        summary,
        pagination: Pagination::from(page),
    })
}
