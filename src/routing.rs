//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    export::export_transactions_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_create_transaction_page, get_edit_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page).post(create_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(endpoints::EDIT_TRANSACTION, post(edit_transaction_endpoint))
        .route(
            endpoints::DELETE_TRANSACTION,
            post(delete_transaction_endpoint),
        )
        .route(endpoints::EXPORT, get(export_transactions_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use std::io::Cursor;

    use axum_test::TestServer;
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new("Etc/UTC").expect("could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn add_transaction(
        server: &TestServer,
        transaction_type: &str,
        amount: &str,
        date: &str,
        description: &str,
    ) {
        server
            .post(endpoints::NEW_TRANSACTION_VIEW)
            .form(&[
                ("type", transaction_type),
                ("amount", amount),
                ("date", date),
                ("description", description),
                ("category", ""),
            ])
            .await
            .assert_status_see_other();
    }

    async fn export_rows(server: &TestServer) -> Vec<Vec<Data>> {
        let response = server.get(endpoints::EXPORT).await;
        response.assert_status_ok();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(response.as_bytes().to_vec()))
            .expect("could not open exported workbook");
        let range = workbook
            .worksheet_range("Transactions")
            .expect("could not read worksheet");

        range.rows().map(|row| row.to_vec()).collect()
    }

    #[tokio::test]
    async fn root_lists_transactions() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Transactions"));
    }

    #[tokio::test]
    async fn create_then_export() {
        let server = get_test_server();
        add_transaction(&server, "Income", "100", "2024-01-01", "Salary").await;
        add_transaction(&server, "Expense", "50", "2024-01-02", "Groceries").await;

        let rows = export_rows(&server).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][3], Data::String("Income".to_owned()));
        assert_eq!(rows[1][4], Data::Float(100.0));
        assert_eq!(rows[2][3], Data::String("Expense".to_owned()));
        assert_eq!(rows[2][4], Data::Float(-50.0));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let server = get_test_server();
        add_transaction(&server, "Income", "1", "2024-01-01", "Alpha").await;
        server
            .post(endpoints::DELETE_TRANSACTION)
            .form(&[("id", "1")])
            .await
            .assert_status_see_other();

        add_transaction(&server, "Income", "2", "2024-01-01", "Bravo").await;

        server.get("/edit/1").await.assert_status_not_found();
        let response = server.get("/edit/2").await;
        response.assert_status_ok();
        assert!(response.text().contains("Bravo"));
    }

    #[tokio::test]
    async fn edit_updates_transaction() {
        let server = get_test_server();
        add_transaction(&server, "Expense", "10", "2024-01-01", "Lunch").await;

        server
            .post(endpoints::EDIT_TRANSACTION)
            .form(&[
                ("id", "1"),
                ("amount", "-12.5"),
                ("date", "2024-01-03"),
                ("description", "Dinner"),
                ("category", "Food"),
            ])
            .await
            .assert_status_see_other();

        let rows = export_rows(&server).await;
        assert_eq!(
            rows[1],
            vec![
                Data::String("2024-01-03".to_owned()),
                Data::String("Dinner".to_owned()),
                Data::String("Food".to_owned()),
                Data::String("Expense".to_owned()),
                Data::Float(-12.5),
            ]
        );
    }

    #[tokio::test]
    async fn edit_and_delete_missing_transaction_redirect() {
        let server = get_test_server();

        server
            .post(endpoints::EDIT_TRANSACTION)
            .form(&[
                ("id", "9"),
                ("amount", "1"),
                ("date", "2024-01-03"),
                ("description", ""),
                ("category", ""),
            ])
            .await
            .assert_status_see_other();
        server
            .post(endpoints::DELETE_TRANSACTION)
            .form(&[("id", "9")])
            .await
            .assert_status_see_other();

        let rows = export_rows(&server).await;
        assert_eq!(rows.len(), 1, "want only the header row, got {rows:?}");
    }

    #[tokio::test]
    async fn non_finite_amounts_are_rejected() {
        let server = get_test_server();
        add_transaction(&server, "Expense", "10", "2024-01-01", "Lunch").await;

        let response = server
            .post(endpoints::NEW_TRANSACTION_VIEW)
            .form(&[
                ("type", "Income"),
                ("amount", "NaN"),
                ("date", "2024-01-02"),
                ("description", "Bad"),
                ("category", ""),
            ])
            .expect_failure()
            .await;
        assert!(
            response.status_code().is_client_error(),
            "want 4xx for NaN amount, got {}",
            response.status_code()
        );

        let response = server
            .post(endpoints::EDIT_TRANSACTION)
            .form(&[
                ("id", "1"),
                ("amount", "inf"),
                ("date", "2024-01-02"),
                ("description", "Bad"),
                ("category", ""),
            ])
            .expect_failure()
            .await;
        assert!(
            response.status_code().is_client_error(),
            "want 4xx for infinite amount, got {}",
            response.status_code()
        );

        let rows = export_rows(&server).await;
        assert_eq!(rows.len(), 2, "want header and one row, got {rows:?}");
        assert_eq!(rows[1][1], Data::String("Lunch".to_owned()));
        assert_eq!(rows[1][4], Data::Float(-10.0));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/does/not/exist").await.assert_status_not_found();
    }
}
