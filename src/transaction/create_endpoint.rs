//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    transaction::{
        core::{Transaction, TransactionType, create_transaction, deserialize_finite_amount},
        store::TransactionStore,
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store that new transactions are added to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize, Serialize)]
pub struct TransactionForm {
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The value of the transaction in dollars.
    #[serde(deserialize_with = "deserialize_finite_amount")]
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// A free-text category.
    #[serde(default)]
    pub category: String,
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let builder = Transaction::build(form.transaction_type, form.amount, form.date)
        .description(&form.description)
        .category(&form.category);

    let transaction = {
        let mut store = state
            .transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        create_transaction(builder, &mut store)
    };

    tracing::debug!(
        "Created transaction {} ({}, {})",
        transaction.id,
        transaction.transaction_type,
        transaction.amount
    );

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
