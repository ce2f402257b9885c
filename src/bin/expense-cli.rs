use anyhow::Result;
use colored::Colorize;
use serde_json::Value;
use std::io::Write;

use expense_tracker::cli_helper::{call_processor, execute_with_retry, initialize_app_config};
use expense_tracker::cli_utils::{
    CliResult, Input, format_table,
    formatting::{expense_rows, format_amount, format_count, print_header},
    menu::{Operation, confirm_operation},
    print_error, print_info, print_success,
};
use expense_tracker::expenses::processor_enums::{ExpenseProcessorInput, ExpenseProcessorOutput};
use expense_tracker::expenses::validation::RawExpenseInput;
use expense_tracker::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║         Expense Tracker CLI                           ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();

    eprint!("Initializing app config... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config() {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    eprintln!();

    loop {
        let op = match Operation::select() {
            Ok(op) => op,
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                break;
            }
        };

        let result = match op {
            Operation::List => list_expenses(&app_config).await,
            Operation::Create => create_expense(&app_config).await,
            Operation::Delete => delete_expense(&app_config).await,
            Operation::Exit => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
        };

        if let Err(e) = result {
            print_error(&e.to_string());
        }

        eprintln!();
    }

    Ok(())
}

async fn list_expenses(app_config: &AppConfig) -> CliResult<()> {
    print_header("Expenses");

    let output = execute_with_retry(|| call_processor(ExpenseProcessorInput::ListExpenses, app_config)).await?;

    if let ExpenseProcessorOutput::ListExpenses(expenses) = output {
        if expenses.is_empty() {
            print_info("No expenses recorded yet");
            return Ok(());
        }

        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        format_table(
            vec!["ID", "Date", "Category", "Description", "Amount"],
            expense_rows(&expenses),
        );
        println!();
        println!("{}", format_count("Expenses", expenses.len()));
        println!("Total: {}", format_amount(total).bright_cyan());
    }

    Ok(())
}

async fn create_expense(app_config: &AppConfig) -> CliResult<()> {
    print_header("Create Expense");

    let raw = RawExpenseInput {
        amount: Some(Value::String(Input::get_string("Amount")?)),
        category: Some(Value::String(Input::get_string("Category")?)),
        date: Some(Value::String(Input::get_date("Date")?)),
        description: Input::get_optional_string("Description")?.map(Value::String),
    };

    let output = call_processor(ExpenseProcessorInput::CreateExpense(raw), app_config).await?;

    if let ExpenseProcessorOutput::CreateExpense(record) = output {
        print_success(&format!(
            "Expense {} recorded: {} on {} ({})",
            record.id,
            format_amount(record.amount),
            record.date,
            record.category
        ));
    }

    Ok(())
}

async fn delete_expense(app_config: &AppConfig) -> CliResult<()> {
    print_header("Delete Expense");

    let expense_id = Input::get_i32("Expense ID")?;
    if !confirm_operation(&format!("Delete expense {}?", expense_id))? {
        print_info("Deletion cancelled");
        return Ok(());
    }

    call_processor(ExpenseProcessorInput::DeleteExpense(expense_id), app_config).await?;
    print_success(&format!("Expense {} deleted", expense_id));

    Ok(())
}
