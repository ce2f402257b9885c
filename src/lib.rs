// Public library interface for expense-tracker
pub mod api;
pub mod cli_helper;
pub mod cli_utils;
pub mod expenses;
pub mod schema;
pub mod utils;
pub mod web_ui;
