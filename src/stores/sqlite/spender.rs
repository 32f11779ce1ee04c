//! Implements a SQLite backed spender store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{Error, NewSpender, Spender, stores::SpenderStore};

/// Stores spenders in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteSpenderStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteSpenderStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl SpenderStore for SQLiteSpenderStore {
    /// Create a new spender in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error.
    fn create(&mut self, spender: NewSpender) -> Result<Spender, Error> {
        let id = self
            .lock()?
            .prepare("INSERT INTO spender (name, email) VALUES (?1, ?2) RETURNING id")?
            .query_row((&spender.name, &spender.email), |row| row.get(0))?;

        Ok(spender.finalise(id))
    }

    /// Retrieve every spender in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is a SQL error
    /// or a row cannot be read.
    fn get_all(&self) -> Result<Vec<Spender>, Error> {
        self.lock()?
            .prepare("SELECT id, name, email FROM spender ORDER BY id")?
            .query_map([], map_spender_row)?
            .map(|maybe_spender| maybe_spender.map_err(Error::SqlError))
            .collect()
    }
}

/// Create the spender table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_spender_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS spender (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_spender_row(row: &Row) -> Result<Spender, rusqlite::Error> {
    Ok(Spender {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
