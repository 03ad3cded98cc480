//! Transaction management for the budget tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The in-memory `TransactionStore` that owns every transaction
//! - View handlers and form endpoints for the transaction pages

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod store;
mod transactions_page;

pub use core::{
    Transaction, TransactionBuilder, TransactionId, TransactionType, create_transaction,
    get_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
