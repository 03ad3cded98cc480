//! Defines the core data models and store operations for transactions.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use time::Date;

use crate::{Error, transaction::store::TransactionStore};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Whether a transaction records money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The name of the transaction type as shown to users and written to exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// A text description of what the transaction was for.
    pub description: String,
    /// A free-text category, e.g. "Groceries", "Transport", "Rent".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(transaction_type: TransactionType, amount: f64, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            transaction_type,
            amount,
            date,
            description: String::new(),
            category: String::new(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ID is assigned by [TransactionStore::add], so a builder holds every
/// field except the ID.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// let builder = Transaction::build(TransactionType::Expense, 45.99, date!(2025 - 01 - 15))
///     .description("Coffee shop purchase")
///     .category("Eating out");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,

    /// The monetary amount of the transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    /// Expenses entered as positive amounts are negated by
    /// [create_transaction].
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    ///
    /// # Examples
    /// - `"Salary - January 2025"`
    /// - `"Starbucks #1234 - Downtown"`
    pub description: String,

    /// A free-text category for the transaction.
    pub category: String,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.description);
        self
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        category.clone_into(&mut self.category);
        self
    }

    /// Negate positive expense amounts so that all expenses are stored as
    /// non-positive numbers. Income amounts are left as they are.
    fn normalize_sign(mut self) -> Self {
        if self.transaction_type == TransactionType::Expense && self.amount > 0.0 {
            self.amount = -self.amount;
        }

        self
    }
}

/// Deserialize an amount, rejecting `NaN` and infinities.
///
/// Form fields are parsed with `str::parse`, which accepts "NaN" and "inf".
pub(crate) fn deserialize_finite_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = f64::deserialize(deserializer)?;

    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(D::Error::custom(format!(
            "invalid amount {amount}, expected a finite number"
        )))
    }
}

// ============================================================================
// STORE OPERATIONS
// ============================================================================

/// Add a new transaction to the store from a builder.
///
/// A positive amount on an expense is negated before the transaction is
/// stored. This only happens here, updates store the amount they are given.
pub fn create_transaction(builder: TransactionBuilder, store: &mut TransactionStore) -> Transaction {
    store.add(builder.normalize_sign())
}

/// Retrieve a transaction from the store by its `id`.
///
/// # Errors
/// This function will return a [Error::NotFound] if `id` does not refer to a
/// stored transaction.
pub fn get_transaction(id: TransactionId, store: &TransactionStore) -> Result<Transaction, Error> {
    store.find_by_id(id).cloned().ok_or(Error::NotFound)
}

// ============================================================================
// TESTS
// ============================================================================
