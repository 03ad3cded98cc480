//! Defines the route handler for the page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, base, dollar_input_styles,
    },
    navigation::NavBar,
    transaction::{
        core::{Transaction, TransactionId, get_transaction},
        form::{TransactionFormDefaults, transaction_form_fields},
        store::TransactionStore,
    },
};

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW).into_html();
    let fields = transaction_form_fields(&TransactionFormDefaults {
        transaction_type: None,
        amount: Some(transaction.amount),
        date: transaction.date,
        description: &transaction.description,
        category: &transaction.category,
        autofocus_amount: false,
    });

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::EDIT_TRANSACTION)
                class="space-y-5"
            {
                h1 class="text-xl font-bold" { "Edit Transaction" }

                input type="hidden" name="id" value=(transaction.id);

                div
                {
                    span class=(FORM_LABEL_STYLE) { "Type" }
                    p data-transaction-type="true" class="text-sm" { (transaction.transaction_type) }
                }

                (fields)

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
            }
        }
    };

    base("Edit Transaction", &[dollar_input_styles()], &content)
}

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The store to look up the transaction in.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Renders the page for editing a transaction.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has the ID `transaction_id`,
/// which is rendered as a 404 page.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let transaction = {
        let store = state
            .transaction_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        get_transaction(transaction_id, &store).inspect_err(|_| {
            tracing::warn!("Tried to edit transaction {transaction_id} which does not exist")
        })?
    };

    Ok(edit_transaction_view(&transaction).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        Error, endpoints,
        transaction::{
            Transaction, TransactionStore, TransactionType, create_transaction,
            edit_page::{EditTransactionPageState, get_edit_transaction_page},
        },
    };

    fn get_test_state() -> EditTransactionPageState {
        let mut store = TransactionStore::new();
        create_transaction(
            Transaction::build(TransactionType::Expense, 50.0, date!(2024 - 01 - 02))
                .description("Groceries")
                .category("Food"),
            &mut store,
        );

        EditTransactionPageState {
            transaction_store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn renders_form_prefilled_with_transaction() {
        let response = get_edit_transaction_page(State(get_test_state()), Path(1))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;

        let form_selector = Selector::parse("form").unwrap();
        let form = document.select(&form_selector).next().expect("want a form");
        assert_eq!(form.value().attr("action"), Some(endpoints::EDIT_TRANSACTION));
        assert_eq!(form.value().attr("method"), Some("post"));

        assert_input_value(&document, "id", "1");
        assert_input_value(&document, "amount", "-50.00");
        assert_input_value(&document, "date", "2024-01-02");
        assert_input_value(&document, "description", "Groceries");
        assert_input_value(&document, "category", "Food");

        let type_selector = Selector::parse("[data-transaction-type]").unwrap();
        let type_text = document
            .select(&type_selector)
            .next()
            .map(|element| element.text().collect::<String>());
        assert_eq!(type_text.as_deref(), Some("Expense"));
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let result = get_edit_transaction_page(State(get_test_state()), Path(99)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn missing_transaction_renders_404_page() {
        let response = match get_edit_transaction_page(State(get_test_state()), Path(99)).await {
            Ok(response) => response,
            Err(error) => error.into_response(),
        };

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[track_caller]
    fn assert_input_value(document: &Html, name: &str, want: &str) {
        let selector = Selector::parse(&format!("input[name={name}]")).unwrap();
        let value = document
            .select(&selector)
            .next()
            .and_then(|input| input.value().attr("value"));

        assert_eq!(value, Some(want), "want {name} input with value {want:?}, got {value:?}");
    }

    async fn parse_html(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }
}
