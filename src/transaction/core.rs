//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::{SpenderId, TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where a spender either spent or earned money.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The amount of money spent or earned.
    ///
    /// This is a magnitude, whether the money came in or went out is given by
    /// `transaction_type`.
    pub amount: f64,
    /// A free text label, e.g. "Food".
    pub category: String,
    /// Either "income" or "expense". Other values are stored as given but are
    /// not counted in summaries, see [Transaction::kind].
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    pub note: String,
    /// A link to a photo of the receipt. Empty when there is none.
    pub image_url: String,
    /// The ID of the spender the transaction belongs to.
    pub spender_id: SpenderId,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: f64,
        date: OffsetDateTime,
        transaction_type: &str,
        spender_id: SpenderId,
    ) -> TransactionBuilder {
        TransactionBuilder {
            date,
            amount,
            category: String::new(),
            transaction_type: transaction_type.to_owned(),
            note: String::new(),
            image_url: String::new(),
            spender_id,
        }
    }

    /// Whether the transaction is income, an expense, or neither.
    pub fn kind(&self) -> Option<TransactionKind> {
        TransactionKind::from_type(&self.transaction_type)
    }
}

/// The two kinds of transaction that count towards a [Summary](crate::Summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Classify the free text `transaction_type` of a transaction.
    ///
    /// The match is exact, so "Income" or " expense" are neither kind.
    pub fn from_type(transaction_type: &str) -> Option<Self> {
        match transaction_type {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The text stored in the database for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of a [Transaction] minus its ID.
///
/// This is also the JSON body for creating and updating transactions. Every
/// field is required except `image_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionBuilder {
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A free text label, e.g. "Food".
    pub category: String,
    /// Either "income" or "expense".
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    pub note: String,
    /// A link to a photo of the receipt.
    #[serde(default)]
    pub image_url: String,
    /// The ID of the spender the transaction belongs to.
    pub spender_id: SpenderId,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        category.clone_into(&mut self.category);
        self
    }

    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        note.clone_into(&mut self.note);
        self
    }

    /// Set the image URL for the transaction.
    pub fn image_url(mut self, image_url: &str) -> Self {
        image_url.clone_into(&mut self.image_url);
        self
    }

    /// Create the [Transaction] with the database `id`.
    pub fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            transaction_type: self.transaction_type,
            note: self.note,
            image_url: self.image_url,
            spender_id: self.spender_id,
        }
    }
}
