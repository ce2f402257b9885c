use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use crate::expenses::error::ExpenseError;
use crate::expenses::processor_enums::{ExpenseProcessorInput, ExpenseProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config() -> Result<AppConfig> {
    AppConfig::from_env()
}

/// Run one expense operation against the configured store
pub async fn call_processor(
    input: ExpenseProcessorInput,
    app_config: &AppConfig,
) -> Result<ExpenseProcessorOutput, ExpenseError> {
    input.process(app_config).await
}

/// Prompt user to retry a failed operation
pub fn prompt_retry() -> Result<bool> {
    loop {
        print!("Operation failed. Retry? (y/n): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                println!("Please enter 'y' or 'n'");
                continue;
            }
        }
    }
}

/// Execute an operation with retry prompt on storage failure
pub async fn execute_with_retry<F, Fut, T>(operation: F) -> Result<T, ExpenseError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, ExpenseError>>,
{
    loop {
        match operation().await {
            Err(ExpenseError::Storage(msg)) => {
                eprintln!("\n{}: {}\n", "Error".red(), msg);

                if prompt_retry().unwrap_or(false) {
                    continue;
                }
                return Err(ExpenseError::Storage(msg));
            }
            other => return other,
        }
    }
}
