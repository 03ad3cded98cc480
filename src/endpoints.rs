//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/edit/{transaction_id}', use [format_endpoint].

/// The root route which lists all transactions.
pub const TRANSACTIONS_VIEW: &str = "/";
/// The page for creating a new transaction, and the route its form posts to.
pub const NEW_TRANSACTION_VIEW: &str = "/add";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/edit/{transaction_id}";
/// The route the edit transaction form posts to.
pub const EDIT_TRANSACTION: &str = "/edit";
/// The route for deleting a transaction.
pub const DELETE_TRANSACTION: &str = "/delete";
/// The route for downloading all transactions as a spreadsheet.
pub const EXPORT: &str = "/export";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// Replace the first `{parameter}` in `endpoint_path` with `id`.
///
/// Returns `endpoint_path` unchanged if it has no parameter.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| start + offset + 1);

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}
