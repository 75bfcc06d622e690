//! Core transaction domain types.

use time::Date;

use crate::database_id::TransactionId;

/// An amount of money spent on something, recorded in the ledger.
///
/// Transactions are never edited after they are created, they can only be
/// deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent, always greater than zero.
    pub amount: f64,
    /// A free-form label such as "Food" or "Rent".
    ///
    /// Categories are compared exactly, so "food" and "Food" are different
    /// categories.
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// An optional note about what the money was spent on.
    pub description: Option<String>,
}

impl Transaction {
    /// Convert the transaction into the positional row sent to API clients.
    pub fn into_row(self) -> TransactionRow {
        (
            self.id,
            self.amount,
            self.category,
            self.date.to_string(),
            self.description,
        )
    }
}

/// A transaction that passed validation but has not been saved yet.
///
/// Client input should go through [crate::validate_transaction] to get one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The amount of money spent, must be greater than zero.
    pub amount: f64,
    /// The category label, must not be blank.
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// An optional note about the transaction.
    pub description: Option<String>,
}

/// A transaction as a tuple of (id, amount, category, date, description).
///
/// This is the shape of each item in the transaction listing, where the date
/// is formatted as `YYYY-MM-DD`.
pub type TransactionRow = (TransactionId, f64, String, String, Option<String>);
