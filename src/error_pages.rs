//! Full-page responses for requests that cannot be served, i.e. 404 and 500 pages.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining what went wrong and how the user might fix it.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    /// The page for a transaction or route that does not exist.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. The transaction may have been deleted.",
        }
    }

    /// An internal server error page with a custom message.
    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal_server_error(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let title = self
            .status
            .canonical_reason()
            .unwrap_or("Something Went Wrong");
        let markup = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, Html(markup.into_string())).into_response()
    }
}

/// Route handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

/// Route handler for the generic internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}
