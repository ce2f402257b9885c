use crate::cli_utils::{CliError, CliResult};
use crate::expenses::validation::DATE_FORMAT;
use dialoguer::Input as DialoguerInput;

/// Input utilities
pub struct Input;

impl Input {
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::new().with_prompt(prompt).interact_text()?)
    }

    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(if input.is_empty() { None } else { Some(input) })
    }

    /// Prompts for a date, offering today as the default.
    pub fn get_date(prompt: &str) -> CliResult<String> {
        let today = chrono::Local::now().date_naive().format(DATE_FORMAT).to_string();
        Ok(DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
            .default(today)
            .interact_text()?)
    }

    pub fn get_i32(prompt: &str) -> CliResult<i32> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        input
            .trim()
            .parse::<i32>()
            .map_err(|_| CliError::ValidationError("Invalid number format".to_string()))
    }
}
