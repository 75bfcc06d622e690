//! Budget creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{AppState, Error, db::lock_connection, ledger::submit_budget};

/// The state needed for creating or updating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Set the budget for a category, responding with 201 or 400 and the validation error.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Json(candidate) = body.map_err(|rejection| Error::InvalidInput(rejection.body_text()))?;

    let connection = lock_connection(&state.db_connection)?;
    submit_budget(&candidate, &connection)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Budget added/updated" })),
    ))
}
