//! The input fields shared by the create and edit transaction forms.

use maud::{Markup, html};
use time::Date;

use crate::{
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::TransactionType,
};

/// Values to prefill the transaction form with.
pub struct TransactionFormDefaults<'a> {
    /// The type to select, or `None` to omit the type selector, e.g. when
    /// editing since the type of a transaction cannot be changed.
    pub transaction_type: Option<TransactionType>,
    /// The amount to show, or `None` for an empty input.
    pub amount: Option<f64>,
    pub date: Date,
    pub description: &'a str,
    pub category: &'a str,
    pub autofocus_amount: bool,
}

/// The type, amount, date, description and category inputs, without the
/// enclosing form element.
pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(format_amount);
    // Amounts with sub-cent precision would fail the browser's step check.
    let step = match &amount_str {
        Some(amount) if amount.split_once('.').is_some_and(|(_, cents)| cents.len() > 2) => "any",
        _ => "0.01",
    };

    html! {
        @if let Some(transaction_type) = defaults.transaction_type {
            (transaction_type_fieldset(transaction_type))
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            div class="input-wrapper"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step=(step)
                    placeholder="0.00"
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="e.g. Weekly shop"
                value=(defaults.description)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            input
                name="category"
                id="category"
                type="text"
                placeholder="e.g. Groceries"
                value=(defaults.category)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// Show `amount` with two decimal places unless that would change its value.
fn format_amount(amount: f64) -> String {
    let rounded = format!("{amount:.2}");

    if rounded.parse::<f64>() == Ok(amount) {
        rounded
    } else {
        amount.to_string()
    }
}

fn transaction_type_fieldset(selected: TransactionType) -> Markup {
    html! {
        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                    @let id = format!("type-{}", transaction_type.as_str().to_lowercase());

                    div
                    {
                        input
                            name="type"
                            id=(id)
                            type="radio"
                            value=(transaction_type)
                            checked[transaction_type == selected]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (transaction_type) }
                    }
                }
            }
        }
    }
}
