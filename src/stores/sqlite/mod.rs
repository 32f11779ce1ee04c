//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod spender;
mod transaction;

pub use spender::{SQLiteSpenderStore, create_spender_table};
pub use transaction::{SQLiteTransactionStore, create_transaction_table};

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppConfig, AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteSpenderStore, SQLiteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection, config: AppConfig) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        config,
        SQLiteSpenderStore::new(connection.clone()),
        SQLiteTransactionStore::new(connection),
    ))
}
