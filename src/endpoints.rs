//! The API endpoints URIs.

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list budgets and create or update a budget.
pub const BUDGETS: &str = "/budgets";
/// The route to compare spending against each budget.
pub const BUDGET_CHECK: &str = "/budgets/check";
/// The route to generate the spending report.
pub const GENERATE_REPORT: &str = "/generate_report";
