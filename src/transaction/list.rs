//! Transaction listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, db::lock_connection, ledger::list_transactions, transaction::TransactionRow,
};

/// The state needed for listing transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Respond with every transaction as an `[id, amount, category, date, description]` array.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<TransactionRow>>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let rows = list_transactions(&connection)?
        .into_iter()
        .map(|transaction| transaction.into_row())
        .collect();

    Ok(Json(rows))
}
