// Shared helpers for the interactive expense CLI
pub mod formatting;
pub mod input;
pub mod menu;

pub use formatting::format_table;
pub use input::Input;
pub use menu::Menu;

use crate::expenses::error::ExpenseError;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    DatabaseError(String),
    ValidationError(String),
    NotFound(String),
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<ExpenseError> for CliError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Validation(msg) => CliError::ValidationError(msg),
            ExpenseError::NotFound(id) => CliError::NotFound(format!("expense {}", id)),
            ExpenseError::Storage(msg) => CliError::DatabaseError(msg),
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_error_conversion() {
        let err: CliError = ExpenseError::NotFound(3).into();
        assert_eq!(err.to_string(), "Not found: expense 3");

        let err: CliError = ExpenseError::missing_field("amount").into();
        assert_eq!(err.to_string(), "Validation error: Missing required field: amount");
    }
}
