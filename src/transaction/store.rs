//! The in-memory transaction store.

use crate::transaction::core::{Transaction, TransactionBuilder, TransactionId};

/// Holds every transaction for the lifetime of the process.
///
/// Transactions are kept in insertion order. IDs start at 1, increase by one
/// for each added transaction and are never reused, even after a delete.
///
/// The store does no locking of its own, share it behind a mutex.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Assign the next ID to the transaction in `builder` and append it.
    ///
    /// Returns a copy of the stored transaction.
    pub fn add(&mut self, builder: TransactionBuilder) -> Transaction {
        let transaction = Transaction {
            id: self.next_id,
            transaction_type: builder.transaction_type,
            description: builder.description,
            category: builder.category,
            amount: builder.amount,
            date: builder.date,
        };
        self.next_id += 1;

        self.transactions.push(transaction.clone());

        transaction
    }

    /// The first transaction with `id`, if any.
    pub fn find_by_id(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// A mutable reference to the first transaction with `id`, if any.
    pub fn find_by_id_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
    }

    /// Remove the first transaction with `id`.
    ///
    /// Returns the removed transaction, or `None` if no transaction has `id`.
    pub fn remove_by_id(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(index))
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
