//! Defines the endpoint for updating an existing transaction.
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
        core::{TransactionId, deserialize_finite_amount},
        store::TransactionStore,
    },
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The store holding the transaction to edit.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The form data for updating a transaction.
///
/// The transaction type cannot be changed once a transaction is created.
#[derive(Debug, Deserialize, Serialize)]
pub struct EditTransactionForm {
    /// The ID of the transaction to update.
    pub id: TransactionId,
    /// The new amount, stored as given.
    #[serde(deserialize_with = "deserialize_finite_amount")]
    pub amount: f64,
    /// The new date.
    pub date: Date,
    /// The new description.
    #[serde(default)]
    pub description: String,
    /// The new category.
    #[serde(default)]
    pub category: String,
}

/// A route handler for updating a transaction, always redirects to the transactions view.
///
/// Updating a transaction that does not exist is not an error, the store is
/// left unchanged.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Form(form): Form<EditTransactionForm>,
) -> Result<Response, Error> {
    let rows_affected = {
        let mut store = state
            .transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        update_transaction(&form, &mut store)
    };

    if rows_affected == 0 {
        tracing::warn!(
            "Could not update transaction {}: no transaction with that ID",
            form.id
        );
    }

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

type RowsAffected = usize;

/// Overwrite the description, category, amount and date of the transaction
/// with the ID in `form`.
///
/// The sign of the amount is not normalized, the amount is stored as given.
fn update_transaction(form: &EditTransactionForm, store: &mut TransactionStore) -> RowsAffected {
    let Some(transaction) = store.find_by_id_mut(form.id) else {
        return 0;
    };

    form.description.clone_into(&mut transaction.description);
    form.category.clone_into(&mut transaction.category);
    transaction.amount = form.amount;
    transaction.date = form.date;

    1
}
