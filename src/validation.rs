//! Validation of transactions and budgets submitted by clients.
//!
//! Candidates arrive as JSON objects. Rules are checked in a fixed order and
//! the first rule that fails decides the error message, so clients only ever
//! see one reason at a time.

use serde_json::{Map, Value};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, budget::NewBudget, transaction::NewTransaction};

const TRANSACTION_REQUIRED_FIELDS: [&str; 3] = ["amount", "category", "date"];
const BUDGET_REQUIRED_FIELDS: [&str; 2] = ["category", "budget_limit"];

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Check a candidate transaction and convert it into a [NewTransaction].
///
/// The rules, in order:
/// 1. `amount`, `category` and `date` are present,
/// 2. `amount` is a number greater than zero,
/// 3. `category` is a string that is not blank,
/// 4. `date` is a real calendar date written as `YYYY-MM-DD`,
/// 5. `description`, if given, is a string or null.
///
/// # Errors
/// Returns an [Error::InvalidInput] describing the first rule that failed.
pub fn validate_transaction(candidate: &Value) -> Result<NewTransaction, Error> {
    let fields = as_object(candidate)?;
    check_required_fields(fields, &TRANSACTION_REQUIRED_FIELDS)?;

    let amount = parse_positive_number(field(fields, "amount"))
        .ok_or_else(|| invalid("Amount must be a positive number."))?;
    let category = parse_category(field(fields, "category"))?;
    let date = parse_date(field(fields, "date"))?;
    let description = match field(fields, "description") {
        Value::Null => None,
        Value::String(description) => Some(description.clone()),
        _ => return Err(invalid("Description must be a string.")),
    };

    Ok(NewTransaction {
        amount,
        category,
        date,
        description,
    })
}

/// Check a candidate budget and convert it into a [NewBudget].
///
/// The rules, in order:
/// 1. `category` and `budget_limit` are present,
/// 2. `budget_limit` is a number greater than zero,
/// 3. `category` is a string that is not blank.
///
/// # Errors
/// Returns an [Error::InvalidInput] describing the first rule that failed.
pub fn validate_budget(candidate: &Value) -> Result<NewBudget, Error> {
    let fields = as_object(candidate)?;
    check_required_fields(fields, &BUDGET_REQUIRED_FIELDS)?;

    let limit = parse_positive_number(field(fields, "budget_limit"))
        .ok_or_else(|| invalid("Budget limit must be a positive number."))?;
    let category = parse_category(field(fields, "category"))?;

    Ok(NewBudget { category, limit })
}

fn invalid(reason: &str) -> Error {
    Error::InvalidInput(reason.to_owned())
}

fn as_object(candidate: &Value) -> Result<&Map<String, Value>, Error> {
    candidate
        .as_object()
        .ok_or_else(|| invalid("Request body must be a JSON object."))
}

/// Missing fields are read as null.
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> &'a Value {
    fields.get(name).unwrap_or(&Value::Null)
}

fn check_required_fields(fields: &Map<String, Value>, required: &[&str]) -> Result<(), Error> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !fields.contains_key(*name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

fn parse_positive_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| *number > 0.0)
}

fn parse_category(value: &Value) -> Result<String, Error> {
    match value.as_str() {
        Some(category) if !category.trim().is_empty() => Ok(category.to_owned()),
        _ => Err(invalid("Category must be a non-empty string.")),
    }
}

fn parse_date(value: &Value) -> Result<Date, Error> {
    value
        .as_str()
        .filter(|raw| has_iso_date_shape(raw))
        .and_then(|raw| Date::parse(raw, DATE_FORMAT).ok())
        .ok_or_else(|| invalid("Invalid date format. Use YYYY-MM-DD."))
}

/// Exactly four digits, a dash, two digits, a dash, two digits.
fn has_iso_date_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}
