//! Budget check endpoint.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{BudgetStatus, reconcile},
    db::lock_connection,
};

/// The state needed for checking spending against budgets.
#[derive(Debug, Clone)]
pub struct BudgetCheckState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetCheckState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Respond with the limit, amount spent and amount remaining for each budgeted category.
pub async fn budget_check_endpoint(
    State(state): State<BudgetCheckState>,
) -> Result<Json<BTreeMap<String, BudgetStatus>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    Ok(Json(reconcile(&connection)?))
}
