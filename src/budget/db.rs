//! Database operations for budgets.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    budget::{Budget, NewBudget},
};

/// Set the limit for a budget's category.
///
/// If a budget for the category already exists its limit is replaced with
/// the new one (not added to), and it keeps its ID. Otherwise a new budget is
/// created.
pub fn upsert_budget(budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare(
            "INSERT INTO budgets (category, budget_limit) VALUES (?1, ?2)
             ON CONFLICT(category) DO UPDATE SET budget_limit = excluded.budget_limit
             RETURNING id, category, budget_limit",
        )?
        .query_row((&budget.category, budget.limit), map_row)
        .map_err(|error| error.into())
}

/// Retrieve all budgets in the order they were first created.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, budget_limit FROM budgets ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_budget| maybe_budget.map_err(|error| error.into()))
        .collect()
}

/// Initialize the budget table.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budgets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT UNIQUE NOT NULL,
            budget_limit REAL NOT NULL
        );",
    )
}

fn map_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        limit: row.get(2)?,
    })
}
