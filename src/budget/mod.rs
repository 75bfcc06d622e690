//! Spending budgets and reconciling them against the ledger.

mod check;
mod create;
mod db;
mod domain;
mod list;
mod reconcile;

pub use check::budget_check_endpoint;
pub use create::create_budget_endpoint;
pub use db::{create_budget_table, get_all_budgets, upsert_budget};
pub use domain::{Budget, BudgetRow, NewBudget};
pub use list::list_budgets_endpoint;
pub use reconcile::{BudgetStatus, reconcile};
