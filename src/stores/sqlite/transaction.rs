//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error, Transaction, TransactionBuilder, TransactionKind,
    database_id::{SpenderId, TransactionId},
    stores::{RowsAffected, TransactionQuery, TransactionStore},
};

/// Stores transactions in a SQLite database.
///
/// Note that because a transaction depends on the [Spender](crate::Spender)
/// model, the spender table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

/// Translate a foreign key violation into [Error::InvalidSpender].
fn map_write_error(error: rusqlite::Error, spender_id: SpenderId) -> Error {
    match error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            _,
        ) => Error::InvalidSpender(spender_id),
        error => error.into(),
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidSpender] if `spender_id` does not refer to a valid spender,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let spender_id = builder.spender_id;

        let transaction = self
            .lock()?
            .prepare(
                "INSERT INTO \"transaction\" (date, amount, category, transaction_type, note, image_url, spender_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING id, date, amount, category, transaction_type, note, image_url, spender_id",
            )?
            .query_row(
                (
                    builder.date,
                    builder.amount,
                    builder.category,
                    builder.transaction_type,
                    builder.note,
                    builder.image_url,
                    builder.spender_id,
                ),
                map_transaction_row,
            )
            .map_err(|error| map_write_error(error, spender_id))?;

        Ok(transaction)
    }

    /// Replace the fields of the transaction `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidSpender] if `spender_id` does not refer to a valid spender,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<RowsAffected, Error> {
        let spender_id = builder.spender_id;

        self.lock()?
            .execute(
                "UPDATE \"transaction\"
                 SET date = ?1, amount = ?2, category = ?3, transaction_type = ?4,
                     note = ?5, image_url = ?6, spender_id = ?7
                 WHERE id = ?8",
                (
                    builder.date,
                    builder.amount,
                    builder.category,
                    builder.transaction_type,
                    builder.note,
                    builder.image_url,
                    builder.spender_id,
                    id,
                ),
            )
            .map_err(|error| map_write_error(error, spender_id))
    }

    /// Retrieve every transaction in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error
    /// or a row cannot be read.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, date, amount, category, transaction_type, note, image_url, spender_id
                 FROM \"transaction\" ORDER BY id",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve a page of a spender's transactions, oldest first.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error
    /// or a row cannot be read.
    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        // Order by ID so that pages do not overlap.
        self.lock()?
            .prepare(
                "SELECT id, date, amount, category, transaction_type, note, image_url, spender_id
                 FROM \"transaction\"
                 WHERE spender_id = :spender_id
                 ORDER BY id
                 LIMIT :limit OFFSET :offset",
            )?
            .query_map(
                rusqlite::named_params! {
                    ":spender_id": query.spender_id,
                    ":limit": query.limit,
                    ":offset": query.offset,
                },
                map_transaction_row,
            )?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Sum the amounts of a spender's transactions of one kind.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn sum_amounts(&self, spender_id: SpenderId, kind: TransactionKind) -> Result<f64, Error> {
        // SUM over zero rows is NULL.
        let total = self.lock()?.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM \"transaction\"
             WHERE spender_id = ?1 AND transaction_type = ?2",
            (spender_id, kind.as_str()),
            |row| row.get(0),
        )?;

        Ok(total)
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                transaction_type TEXT NOT NULL,
                note TEXT NOT NULL,
                image_url TEXT NOT NULL DEFAULT '',
                spender_id INTEGER NOT NULL,
                FOREIGN KEY(spender_id) REFERENCES spender(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_spender_type ON \"transaction\"(spender_id, transaction_type);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        transaction_type: row.get(4)?,
        note: row.get(5)?,
        image_url: row.get(6)?,
        spender_id: row.get(7)?,
    })
}
