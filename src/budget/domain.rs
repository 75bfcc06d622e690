//! Core budget domain types.

use crate::database_id::BudgetId;

/// A spending limit for one category.
///
/// There is at most one budget per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,
    /// The category the limit applies to, matched exactly against transaction categories.
    pub category: String,
    /// The most that should be spent in the category, always greater than zero.
    pub limit: f64,
}

impl Budget {
    /// Convert the budget into the positional row sent to API clients.
    pub fn into_row(self) -> BudgetRow {
        (self.id, self.category, self.limit)
    }
}

/// A budget that passed validation but has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// The category label, must not be blank.
    pub category: String,
    /// The spending limit, must be greater than zero.
    pub limit: f64,
}

/// A budget as a tuple of (id, category, budget_limit).
pub type BudgetRow = (BudgetId, String, f64);
