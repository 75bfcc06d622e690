//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde_json::json;

use crate::{
    AppState,
    budget::{budget_check_endpoint, create_budget_endpoint, list_budgets_endpoint},
    endpoints,
    report::generate_report_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(endpoints::BUDGET_CHECK, get(budget_check_endpoint))
        .route(endpoints::GENERATE_REPORT, get(generate_report_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource could not be found." })),
    )
        .into_response()
}

#[cfg(test)]
mod api_tests {
    use std::collections::BTreeMap;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::{AppState, BudgetStatus, build_router, endpoints};

    /// The server and the directory the report is written to, which is removed on drop.
    fn get_test_server() -> (TestServer, TempDir) {
        let dir = tempfile::tempdir().expect("Could not create temp dir");
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, dir.path().join("report.html"))
            .expect("Could not create app state.");

        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        (server, dir)
    }

    async fn post_groceries(server: &TestServer) -> i64 {
        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": 100.0,
                "category": "Food",
                "date": "2024-12-01",
                "description": "Groceries"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_i64()
            .expect("Response should contain the new ID")
    }

    #[tokio::test]
    async fn add_transaction() {
        let (server, _dir) = get_test_server();

        let id = post_groceries(&server).await;

        let response = server.get(endpoints::TRANSACTIONS).await;
        response.assert_status_ok();
        response.assert_json(&json!([[id, 100.0, "Food", "2024-12-01", "Groceries"]]));
    }

    #[tokio::test]
    async fn invalid_transaction_negative_amount() {
        let (server, _dir) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "amount": -100.0, "category": "Food", "date": "2024-12-01" }))
            .await;

        response.assert_status_bad_request();
        let error = response.json::<Value>()["error"].as_str().unwrap().to_owned();
        assert!(error.contains("positive number"), "got error {error:?}");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (server, _dir) = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .content_type("application/json")
            .text("{\"amount\": ")
            .await;

        response.assert_status_bad_request();
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn delete_transaction_is_idempotent() {
        let (server, _dir) = get_test_server();
        let keep = post_groceries(&server).await;
        let remove = post_groceries(&server).await;

        server
            .delete(&format!("{}/{remove}", endpoints::TRANSACTIONS))
            .await
            .assert_status_ok();
        server
            .delete(&format!("{}/{remove}", endpoints::TRANSACTIONS))
            .await
            .assert_status_ok();
        server
            .delete(&format!("{}/12345", endpoints::TRANSACTIONS))
            .await
            .assert_json(&json!({ "message": "Transaction deleted" }));

        let rows = server.get(endpoints::TRANSACTIONS).await.json::<Vec<Value>>();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], json!(keep));
    }

    #[tokio::test]
    async fn budget_zero_limit() {
        let (server, _dir) = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({ "category": "Food", "budget_limit": 0.0 }))
            .await;

        response.assert_status_bad_request();
        let error = response.json::<Value>()["error"].as_str().unwrap().to_owned();
        assert!(error.contains("positive number"), "got error {error:?}");
    }

    #[tokio::test]
    async fn budget_missing_fields() {
        let (server, _dir) = get_test_server();

        let response = server
            .post(endpoints::BUDGETS)
            .json(&json!({ "category": "Food" }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Missing required field(s): budget_limit" }));
    }

    #[tokio::test]
    async fn resubmitting_budget_replaces_limit() {
        let (server, _dir) = get_test_server();

        for limit in [300.0, 500.0] {
            server
                .post(endpoints::BUDGETS)
                .json(&json!({ "category": "Food", "budget_limit": limit }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get(endpoints::BUDGETS).await;
        response.assert_status_ok();
        response.assert_json(&json!([[1, "Food", 500.0]]));
    }

    #[tokio::test]
    async fn check_budgets() {
        let (server, _dir) = get_test_server();
        server
            .post(endpoints::BUDGETS)
            .json(&json!({ "category": "Food", "budget_limit": 300.0 }))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post(endpoints::BUDGETS)
            .json(&json!({ "category": "Travel", "budget_limit": 80 }))
            .await
            .assert_status(StatusCode::CREATED);
        post_groceries(&server).await;

        let response = server.get(endpoints::BUDGET_CHECK).await;

        response.assert_status_ok();
        let budgets = response.json::<BTreeMap<String, BudgetStatus>>();
        assert_eq!(
            budgets,
            BTreeMap::from([
                (
                    "Food".to_owned(),
                    BudgetStatus {
                        limit: 300.0,
                        spent: 100.0,
                        remaining: 200.0
                    }
                ),
                (
                    "Travel".to_owned(),
                    BudgetStatus {
                        limit: 80.0,
                        spent: 0.0,
                        remaining: 80.0
                    }
                ),
            ])
        );
    }

    #[tokio::test]
    async fn generate_report_without_data() {
        let (server, dir) = get_test_server();

        let response = server.get(endpoints::GENERATE_REPORT).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": "No data to generate report" }));
        assert!(!dir.path().join("report.html").exists());
    }

    #[tokio::test]
    async fn generate_report_writes_chart() {
        let (server, dir) = get_test_server();
        post_groceries(&server).await;

        let response = server.get(endpoints::GENERATE_REPORT).await;

        response.assert_status_ok();
        let message = response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .to_owned();
        assert!(message.starts_with("Report generated: "), "got {message:?}");
        assert!(dir.path().join("report.html").is_file());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _dir) = get_test_server();

        let response = server.get("/nope").await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "The requested resource could not be found." }));
    }
}
