//! Contains traits and implementations for objects that store the domain models.

mod spender;
mod transaction;

pub mod sqlite;

pub use spender::SpenderStore;
pub use transaction::{RowsAffected, TransactionQuery, TransactionStore};
