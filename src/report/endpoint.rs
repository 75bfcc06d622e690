//! Report generation endpoint.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    db::lock_connection,
    report::{category_totals, write_report},
};

/// The state needed for generating the spending report.
#[derive(Debug, Clone)]
pub struct GenerateReportState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub report_path: PathBuf,
}

impl FromRef<AppState> for GenerateReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            report_path: state.report_path.clone(),
        }
    }
}

/// Write the spending report to the configured path.
///
/// When there are no transactions nothing is written and the response says so.
pub async fn generate_report_endpoint(
    State(state): State<GenerateReportState>,
) -> Result<Json<Value>, Error> {
    let totals = {
        let connection = lock_connection(&state.db_connection)?;
        category_totals(&connection)?
    };

    if totals.is_empty() {
        return Ok(Json(json!({ "message": "No data to generate report" })));
    }

    write_report(&totals, &state.report_path)?;
    tracing::info!(
        "Generated spending report for {} categories at {}",
        totals.len(),
        state.report_path.display()
    );

    Ok(Json(json!({
        "message": format!("Report generated: {}", state.report_path.display())
    })))
}
