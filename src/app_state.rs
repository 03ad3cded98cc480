//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{Error, timezone::get_local_offset, transaction::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The in-memory transaction store shared by all request handlers.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] with an empty transaction store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            transaction_store: Arc::new(Mutex::new(TransactionStore::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error};

    #[test]
    fn new_state_has_empty_store() {
        let state = AppState::new("Etc/UTC").unwrap();

        assert!(state.transaction_store.lock().unwrap().is_empty());
    }

    #[test]
    fn new_state_rejects_unknown_timezone() {
        let result = AppState::new("Middle/Earth");

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Middle/Earth".to_owned()))
        );
    }
}
