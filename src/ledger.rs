//! The ledger service: every change to stored transactions and budgets goes through here.
//!
//! Writes are validated before they reach the database, so the database only
//! ever holds valid records. Reads are passed straight through.

use rusqlite::Connection;
use serde_json::Value;

use crate::{
    Error,
    budget::{Budget, get_all_budgets, upsert_budget},
    database_id::TransactionId,
    transaction::{Transaction, create_transaction, delete_transaction, get_all_transactions},
    validation::{validate_budget, validate_transaction},
};

/// Validate a candidate transaction and save it, returning the new transaction's ID.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidInput] if the candidate is not a valid transaction, in which case nothing is saved,
/// - or [Error::SqlError] if the transaction could not be saved.
pub fn submit_transaction(
    candidate: &Value,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let transaction = validate_transaction(candidate)?;
    let transaction = create_transaction(transaction, connection)?;

    tracing::debug!(
        "Added transaction {} in category {:?}",
        transaction.id,
        transaction.category
    );

    Ok(transaction.id)
}

/// Validate a candidate budget and set it as the budget for its category.
///
/// Submitting a budget for a category that already has one replaces the old
/// limit.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidInput] if the candidate is not a valid budget,
/// - or [Error::SqlError] if the budget could not be saved.
pub fn submit_budget(candidate: &Value, connection: &Connection) -> Result<(), Error> {
    let budget = validate_budget(candidate)?;
    let budget = upsert_budget(budget, connection)?;

    tracing::debug!(
        "Set budget for category {:?} to {}",
        budget.category,
        budget.limit
    );

    Ok(())
}

/// Delete a transaction.
///
/// Deleting a transaction that does not exist is not an error, it just does nothing.
pub fn remove_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    if delete_transaction(id, connection)? == 0 {
        tracing::debug!("Transaction {id} was already deleted");
    }

    Ok(())
}

/// All transactions in the order they were added.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    get_all_transactions(connection)
}

/// All budgets in the order they were first created.
pub fn list_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    get_all_budgets(connection)
}
