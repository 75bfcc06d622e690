//! Pennywise is a small service for tracking personal spending against
//! per-category budgets.
//!
//! The library is split into the ledger (validated transactions and budgets
//! stored in SQLite), the budget reconciler that compares spending with each
//! budget's limit, and the report aggregator that totals spending per category.
//! [build_router] exposes all of it as a JSON API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod budget;
mod database_id;
mod db;
mod endpoints;
mod error;
mod ledger;
mod report;
mod routing;
mod transaction;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use budget::{Budget, BudgetStatus, NewBudget, reconcile};
pub use database_id::{BudgetId, DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use ledger::{
    list_budgets, list_transactions, remove_transaction, submit_budget, submit_transaction,
};
pub use report::{category_totals, write_report};
pub use routing::build_router;
pub use transaction::{NewTransaction, Transaction};
pub use validation::{validate_budget, validate_transaction};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
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
