//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The `Summary` of a spender's income and expenses
//! - Route handlers for creating, updating, listing and paging transactions

mod core;
mod create_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod spender_transactions_endpoint;
mod state;
mod summary;
mod summary_endpoint;

pub use core::{Transaction, TransactionBuilder, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use spender_transactions_endpoint::get_spender_transactions_endpoint;
pub use state::TransactionState;
pub use summary::{Summary, get_spender_summary};
pub use summary_endpoint::get_spender_summary_endpoint;
