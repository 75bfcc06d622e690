//! Totalling transactions by category.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::Error;

/// Sum the amounts of all transactions in each category.
///
/// Only categories with at least one transaction are included, budgets play
/// no part. An empty ledger gives an empty map.
pub fn category_totals(connection: &Connection) -> Result<BTreeMap<String, f64>, Error> {
    connection
        .prepare("SELECT category, SUM(amount) FROM transactions GROUP BY category")?
        .query_map([], |row| {
            let category: String = row.get(0)?;
            let total: f64 = row.get(1)?;

            Ok((category, total))
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}
