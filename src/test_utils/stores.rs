//! In-memory stand-ins for the stores, used to test route handlers without a database.

use std::sync::{Arc, Mutex};

use crate::{
    Error, NewSpender, Spender,
    database_id::{SpenderId, TransactionId},
    stores::{RowsAffected, SpenderStore, TransactionQuery, TransactionStore},
    transaction::{Transaction, TransactionBuilder, TransactionKind},
};

fn backend_error() -> Error {
    Error::SqlError(rusqlite::Error::InvalidQuery)
}

/// A transaction store that returns canned results and records how it was called.
///
/// When `fail` is set, every method returns a SQL error.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubTransactionStore {
    pub transactions: Vec<Transaction>,
    pub income_total: f64,
    pub expense_total: f64,
    pub rows_affected: RowsAffected,
    pub fail: bool,
    pub queries: Arc<Mutex<Vec<TransactionQuery>>>,
    pub sum_calls: Arc<Mutex<Vec<(SpenderId, TransactionKind)>>>,
    pub writes: Arc<Mutex<Vec<(Option<TransactionId>, TransactionBuilder)>>>,
}

impl StubTransactionStore {
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// The number of times the store was read from or written to.
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
            + self.sum_calls.lock().unwrap().len()
            + self.writes.lock().unwrap().len()
    }
}

impl TransactionStore for StubTransactionStore {
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        self.writes.lock().unwrap().push((None, builder.clone()));

        if self.fail {
            return Err(backend_error());
        }

        Ok(builder.finalise(self.transactions.len() as TransactionId + 1))
    }

    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<RowsAffected, Error> {
        self.writes.lock().unwrap().push((Some(id), builder));

        if self.fail {
            return Err(backend_error());
        }

        Ok(self.rows_affected)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        if self.fail {
            return Err(backend_error());
        }

        Ok(self.transactions.clone())
    }

    fn get_query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        self.queries.lock().unwrap().push(query);

        if self.fail {
            return Err(backend_error());
        }

        Ok(self.transactions.clone())
    }

    fn sum_amounts(&self, spender_id: SpenderId, kind: TransactionKind) -> Result<f64, Error> {
        self.sum_calls.lock().unwrap().push((spender_id, kind));

        if self.fail {
            return Err(backend_error());
        }

        match kind {
            TransactionKind::Income => Ok(self.income_total),
            TransactionKind::Expense => Ok(self.expense_total),
        }
    }
}

/// A spender store that keeps spenders in a vector.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubSpenderStore {
    pub spenders: Arc<Mutex<Vec<Spender>>>,
    pub fail: bool,
    pub calls: Arc<Mutex<usize>>,
}

impl StubSpenderStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl SpenderStore for StubSpenderStore {
    fn create(&mut self, spender: NewSpender) -> Result<Spender, Error> {
        *self.calls.lock().unwrap() += 1;

        if self.fail {
            return Err(backend_error());
        }

        let mut spenders = self.spenders.lock().unwrap();
        let spender = spender.finalise(spenders.len() as SpenderId + 1);
        spenders.push(spender.clone());

        Ok(spender)
    }

    fn get_all(&self) -> Result<Vec<Spender>, Error> {
        *self.calls.lock().unwrap() += 1;

        if self.fail {
            return Err(backend_error());
        }

        Ok(self.spenders.lock().unwrap().clone())
    }
}
