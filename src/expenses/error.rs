use diesel::r2d2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Client input was missing or malformed. Never reaches storage.
    #[error("{0}")]
    Validation(String),

    #[error("Expense {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Storage(String),
}

impl ExpenseError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing required field: {}", field))
    }

    pub fn invalid_format(detail: impl Into<String>) -> Self {
        Self::Validation(format!("Invalid data format: {}", detail.into()))
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<diesel::result::Error> for ExpenseError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<r2d2::PoolError> for ExpenseError {
    fn from(value: r2d2::PoolError) -> Self {
        Self::Storage(format!("failed to acquire connection: {}", value))
    }
}
