//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/spenders/{spender_id}', use [format_endpoint].

/// The route to create and list spenders.
pub const SPENDERS: &str = "/spenders";
/// The route to page through a spender's transactions.
pub const SPENDER_TRANSACTIONS: &str = "/spenders/{spender_id}/transactions";
/// The route to get the totals of a spender's whole transaction history.
pub const SPENDER_TRANSACTIONS_SUMMARY: &str = "/spenders/{spender_id}/transactions/summary";
/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to update a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// This function assumes that an endpoint path will only have a single parameter, and will only
/// replace the first one.
pub fn format_endpoint(endpoint_path: &str, id: impl ToString) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    match endpoint_path[start..].find('}') {
        Some(length) => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id.to_string(),
            &endpoint_path[start + length + 1..]
        ),
        None => endpoint_path.to_owned(),
    }
}
