//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID of a [Spender](crate::Spender).
pub type SpenderId = DatabaseId;

/// The ID of a [Transaction](crate::Transaction).
pub type TransactionId = DatabaseId;

/// Parse a path parameter as a database ID.
///
/// Database IDs start at one, so zero and negative numbers are rejected.
pub(crate) fn parse_database_id(text: &str) -> Option<DatabaseId> {
    text.parse::<DatabaseId>().ok().filter(|id| *id > 0)
}
