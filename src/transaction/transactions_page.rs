//! Defines the route handler for the page that displays transactions as a table.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_class, base,
        format_currency,
    },
    navigation::NavBar,
    transaction::{
        core::{Transaction, TransactionType},
        store::TransactionStore,
    },
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The store to list transactions from.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Totals over a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerSummary {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts, zero or negative for normalized expenses.
    pub expenses: f64,
}

impl LedgerSummary {
    /// Sum the amounts of `transactions` by transaction type.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut summary, transaction| {
                match transaction.transaction_type {
                    TransactionType::Income => summary.income += transaction.amount,
                    TransactionType::Expense => summary.expenses += transaction.amount,
                }

                summary
            })
    }

    /// Income plus expenses.
    pub fn net(&self) -> f64 {
        self.income + self.expenses
    }
}

/// Render the list of all transactions in the order they were created.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let transactions = state
        .transaction_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .list()
        .to_vec();

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let create_transaction_route = Uri::from_static(endpoints::NEW_TRANSACTION_VIEW);
    let export_route = Uri::from_static(endpoints::EXPORT);
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let summary = LedgerSummary::from_transactions(transactions);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(export_route) class=(LINK_STYLE)
                    {
                        "Export to Excel"
                    }

                    a href=(create_transaction_route) class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                (summary_view(&summary))

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row_view(transaction))
                            }

                            @if transactions.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        data-empty-state="true"
                                        class="px-6 py-4 text-center"
                                    {
                                        "No transactions yet. "
                                        a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                                        {
                                            "Add one."
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

fn summary_view(summary: &LedgerSummary) -> Markup {
    let cards = [
        ("Income", summary.income),
        ("Expenses", summary.expenses),
        ("Net", summary.net()),
    ];

    html! {
        dl class="grid grid-cols-3 gap-4" data-ledger-summary="true"
        {
            @for (label, amount) in cards {
                div class="rounded border border-gray-200 bg-white px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800"
                {
                    dt class="text-xs uppercase text-gray-500 dark:text-gray-400" { (label) }
                    dd class={ "text-lg font-semibold tabular-nums " (amount_class(amount)) }
                    {
                        (format_currency(amount))
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let (description, tooltip) = format_description(&transaction.description);
    let confirm_message = format!(
        "return confirm('Are you sure you want to delete the transaction \"{}\"? This cannot be undone.')",
        escape_js_string(&transaction.description)
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { time datetime=(transaction.date) { (transaction.date) } }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class=(TABLE_CELL_STYLE)
            {
                @if transaction.category.is_empty() {
                    span class="text-gray-400 dark:text-gray-500" { "-" }
                } @else {
                    span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                }
            }
            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type) }
            td class={ "px-6 py-4 text-right tabular-nums " (amount_class(transaction.amount)) }
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    form
                        method="post"
                        action=(endpoints::DELETE_TRANSACTION)
                        onsubmit=(confirm_message)
                    {
                        input type="hidden" name="id" value=(transaction.id);
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}

/// Escape `text` for use inside a single-quoted JavaScript string literal.
///
/// Line terminators are escaped too, a raw one ends the literal early.
fn escape_js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }

    escaped
}
