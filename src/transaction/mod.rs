//! Transactions in the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction`
//! - Database functions for storing, listing and deleting transactions
//! - Route handlers for the transaction endpoints

mod create;
mod db;
mod delete;
mod domain;
mod list;

pub use create::create_transaction_endpoint;
pub use db::{
    create_transaction, create_transaction_table, delete_transaction, get_all_transactions,
};
pub use delete::delete_transaction_endpoint;
pub use domain::{NewTransaction, Transaction, TransactionRow};
pub use list::list_transactions_endpoint;
