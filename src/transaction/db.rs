//! Database operations for transactions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction},
};

/// Save a validated transaction and return it with its generated ID.
///
/// # Errors
/// Returns an [Error::SqlError] if the insert failed.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "INSERT INTO transactions (amount, category, date, description)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, date, description",
        )?
        .query_row(
            (
                transaction.amount,
                &transaction.category,
                transaction.date,
                &transaction.description,
            ),
            map_transaction_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve all transactions in the order they were created.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, category, date, description
             FROM transactions
             ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

type RowsAffected = usize;

/// Delete a transaction by ID and return how many rows were removed.
///
/// Deleting an ID that does not exist removes nothing and is not an error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Initialize the transaction table.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT
        );",
    )
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        date: row.get(3)?,
        description: row.get(4)?,
    })
}
