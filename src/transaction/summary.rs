//! Totals of a spender's income and expenses.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::SpenderId,
    stores::TransactionStore,
    transaction::{Transaction, TransactionKind},
};

/// The total income, total expenses and balance of a set of transactions.
///
/// Summaries are derived on each request and never stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of income transactions.
    pub total_income: f64,
    /// The sum of the amounts of expense transactions.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub current_balance: f64,
}

impl Summary {
    /// Create a summary from pre-computed totals.
    pub fn from_totals(total_income: f64, total_expenses: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            current_balance: total_income - total_expenses,
        }
    }

    /// Sum the transactions in a single pass.
    ///
    /// Transactions that are neither income nor expenses are skipped.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (income, expenses) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, expenses), transaction| {
                    match transaction.kind() {
                        Some(TransactionKind::Income) => (income + transaction.amount, expenses),
                        Some(TransactionKind::Expense) => (income, expenses + transaction.amount),
                        None => (income, expenses),
                    }
                });

        Self::from_totals(income, expenses)
    }
}

/// Summarise the whole transaction history of a spender.
///
/// Unlike [Summary::from_transactions], this asks the store to add up every
/// transaction of the spender, one query per [TransactionKind].
///
/// # Errors
/// Returns any error from the store.
pub fn get_spender_summary<T>(spender_id: SpenderId, store: &T) -> Result<Summary, Error>
where
    T: TransactionStore,
{
    let income = store.sum_amounts(spender_id, TransactionKind::Income)?;
    let expenses = store.sum_amounts(spender_id, TransactionKind::Expense)?;

    Ok(Summary::from_totals(income, expenses))
}
