use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::expenses::{db_types::NewExpense, error::ExpenseError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expense fields exactly as the client sent them. `null` deserializes to `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RawExpenseInput {
    pub amount: Option<Value>,
    pub category: Option<Value>,
    pub date: Option<Value>,
    pub description: Option<Value>,
}

impl RawExpenseInput {
    /// Checks presence of every required field first, then formats.
    pub fn validate(&self) -> Result<NewExpense, ExpenseError> {
        let amount = require(&self.amount, "amount")?;
        let category = require(&self.category, "category")?;
        let date = require(&self.date, "date")?;

        Ok(NewExpense {
            amount: parse_amount(amount)?,
            category: expect_string(category, "category")?,
            date: parse_date(date)?,
            description: match &self.description {
                None => String::new(),
                Some(value) => expect_string(value, "description")?,
            },
        })
    }
}

fn require<'a>(value: &'a Option<Value>, field: &str) -> Result<&'a Value, ExpenseError> {
    value.as_ref().ok_or_else(|| ExpenseError::missing_field(field))
}

pub fn parse_amount(value: &Value) -> Result<f64, ExpenseError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ExpenseError::invalid_format(format!("amount must be a number, got {}", value)))?;

    if !amount.is_finite() {
        return Err(ExpenseError::invalid_format(format!(
            "amount must be a finite number, got {}",
            value
        )));
    }

    Ok(amount)
}

pub fn parse_date(value: &Value) -> Result<NaiveDate, ExpenseError> {
    value
        .as_str()
        .and_then(|text| NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok())
        .ok_or_else(|| {
            ExpenseError::invalid_format(format!("date must be a YYYY-MM-DD date, got {}", value))
        })
}

fn expect_string(value: &Value, field: &str) -> Result<String, ExpenseError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ExpenseError::invalid_format(format!("{} must be a string", field)))
}
