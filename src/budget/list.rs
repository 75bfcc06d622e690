//! Budget listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{AppState, Error, budget::BudgetRow, db::lock_connection, ledger::list_budgets};

/// The state needed for listing budgets.
#[derive(Debug, Clone)]
pub struct ListBudgetsState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListBudgetsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Respond with every budget as an `[id, category, budget_limit]` array.
pub async fn list_budgets_endpoint(
    State(state): State<ListBudgetsState>,
) -> Result<Json<Vec<BudgetRow>>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let rows = list_budgets(&connection)?
        .into_iter()
        .map(|budget| budget.into_row())
        .collect();

    Ok(Json(rows))
}
