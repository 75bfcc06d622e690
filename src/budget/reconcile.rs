//! Reconciling spending against budget limits.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::Error;

/// How much of a budget has been spent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// The budget's spending limit.
    pub limit: f64,
    /// The sum of all transactions in the budget's category.
    pub spent: f64,
    /// `limit - spent`, negative when the budget has been overspent.
    pub remaining: f64,
}

/// Compare the spending in each budgeted category with its limit.
///
/// Every budget gets an entry, with `spent` of zero if nothing has been spent
/// in its category. Categories that only appear on transactions have no
/// budget to compare against and are left out.
///
/// The totals are aggregated by the database on every call.
pub fn reconcile(connection: &Connection) -> Result<BTreeMap<String, BudgetStatus>, Error> {
    connection
        .prepare(
            "SELECT budgets.category, budgets.budget_limit, COALESCE(SUM(transactions.amount), 0.0)
             FROM budgets
             LEFT JOIN transactions ON budgets.category = transactions.category
             GROUP BY budgets.id",
        )?
        .query_map([], |row| {
            let category: String = row.get(0)?;
            let limit: f64 = row.get(1)?;
            let spent: f64 = row.get(2)?;

            Ok((
                category,
                BudgetStatus {
                    limit,
                    spent,
                    remaining: limit - spent,
                },
            ))
        })?
        .map(|maybe_status| maybe_status.map_err(|error| error.into()))
        .collect()
}
