//! Transaction creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{AppState, Error, db::lock_connection, ledger::submit_transaction};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle a new transaction, responding with 201 and the new ID or 400 and the validation error.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Json(candidate) = body.map_err(|rejection| Error::InvalidInput(rejection.body_text()))?;

    let connection = lock_connection(&state.db_connection)?;
    let id = submit_transaction(&candidate, &connection)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Transaction added", "id": id })),
    ))
}
