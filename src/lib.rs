//! A personal budget tracker.
//!
//! Record income and expense transactions, list, edit and delete them, and
//! export the ledger to a spreadsheet.
//!
//! This library provides a REST API that directly serves HTML pages. All
//! transactions are kept in memory for the lifetime of the server process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod endpoints;
mod error_pages;
mod export;
mod html;
mod logging;
mod navigation;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{
    Transaction, TransactionBuilder, TransactionId, TransactionStore, TransactionType,
};

use crate::error_pages::ErrorPage;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the lock on the transaction store.
    ///
    /// This only happens if another thread panicked while holding the lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// The spreadsheet writer failed to build the export workbook.
    #[error("could not export transactions: {0}")]
    ExportError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Error::ExportError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::InvalidTimezoneError(timezone) => ErrorPage::internal_server_error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(),
            Error::ExportError(error) => {
                tracing::error!("Could not export transactions: {error}");
                ErrorPage::internal_server_error(
                    "Export Failed",
                    "The spreadsheet could not be created. Try again later or check the server logs.",
                )
                .into_response()
            }
            Error::StoreLockError => ErrorPage::default().into_response(),
        }
    }
}
