//! Database setup and access to the shared connection.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, budget::create_budget_table, transaction::create_transaction_table};

/// Create the tables for the ledger if they do not exist yet.
///
/// Safe to call on every start up, existing data is left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_budget_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Lock the shared database connection for the duration of one operation.
///
/// The connection is released when the returned guard is dropped.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if another thread panicked while holding the lock.
pub fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{Error, db::lock_connection, initialize_db};

    fn table_names(connection: &Connection) -> Vec<String> {
        connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect()
    }

    #[test]
    fn initialize_creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize_db(&connection).expect("Could not initialize database");

        assert_eq!(table_names(&connection), vec!["budgets", "transactions"]);
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO budgets (category, budget_limit) VALUES ('Food', 300.0)",
                (),
            )
            .unwrap();

        initialize_db(&connection).expect("Second initialization should succeed");

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM budgets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn lock_connection_fails_on_poisoned_mutex() {
        let db_connection = Arc::new(Mutex::new(Connection::open_in_memory().unwrap()));
        let poisoner = db_connection.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(
            lock_connection(&db_connection).err(),
            Some(Error::DatabaseLockError)
        );
    }
}
