//! Defines the endpoint for deleting a transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, endpoints,
    transaction::{core::TransactionId, store::TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store holding the transaction to delete.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The form data for deleting a transaction.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTransactionForm {
    /// The ID of the transaction to delete.
    pub id: TransactionId,
}

/// A route handler for deleting a transaction, always redirects to the transactions view.
///
/// Deleting a transaction that does not exist is not an error.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Form(form): Form<DeleteTransactionForm>,
) -> Result<Response, Error> {
    let rows_affected = {
        let mut store = state
            .transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        delete_transaction(form.id, &mut store)
    };

    match rows_affected {
        0 => tracing::warn!(
            "Could not delete transaction {}: no transaction with that ID",
            form.id
        ),
        _ => tracing::debug!("Deleted transaction {}", form.id),
    }

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

type RowsAffected = usize;

fn delete_transaction(id: TransactionId, store: &mut TransactionStore) -> RowsAffected {
    match store.remove_by_id(id) {
        Some(_) => 1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        Error, endpoints,
        transaction::{
            Transaction, TransactionStore, TransactionType, create_transaction,
            delete_endpoint::{
                DeleteTransactionForm, DeleteTransactionState, delete_transaction,
                delete_transaction_endpoint,
            },
            get_transaction,
        },
    };

    #[test]
    fn test_deletes_transaction() {
        let mut store = TransactionStore::new();
        let transaction = create_transaction(
            Transaction::build(TransactionType::Income, 1.23, date!(2025 - 10 - 26)),
            &mut store,
        );

        let rows_affected = delete_transaction(transaction.id, &mut store);

        assert_eq!(rows_affected, 1);
        assert_eq!(get_transaction(transaction.id, &store), Err(Error::NotFound))
    }

    #[test]
    fn deleting_missing_transaction_affects_no_rows() {
        let mut store = TransactionStore::new();

        assert_eq!(delete_transaction(1, &mut store), 0);
    }

    #[tokio::test]
    async fn endpoint_redirects_even_when_missing() {
        let state = DeleteTransactionState {
            transaction_store: Arc::new(Mutex::new(TransactionStore::new())),
        };

        let response = delete_transaction_endpoint(
            State(state.clone()),
            Form(DeleteTransactionForm { id: 7 }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            endpoints::TRANSACTIONS_VIEW
        );
        assert!(state.transaction_store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn endpoint_removes_only_matching_transaction() {
        let mut store = TransactionStore::new();
        for amount in [1.0, 2.0, 3.0] {
            create_transaction(
                Transaction::build(TransactionType::Income, amount, date!(2025 - 10 - 26)),
                &mut store,
            );
        }
        let state = DeleteTransactionState {
            transaction_store: Arc::new(Mutex::new(store)),
        };

        delete_transaction_endpoint(State(state.clone()), Form(DeleteTransactionForm { id: 2 }))
            .await
            .unwrap();

        let store = state.transaction_store.lock().unwrap();
        let ids: Vec<_> = store.list().iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
