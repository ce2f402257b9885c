use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        error::ApiError,
        extractors::{ExpenseId, ExpensePayload},
    },
    expenses::{
        db_types::ExpenseRecord,
        processor_enums::{ExpenseProcessorInput, ExpenseProcessorOutput},
    },
    utils::{app_config::AppConfig, traits::ActionProcessor},
};

/// GET /api/expenses - All expenses, most recent first
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
) -> Result<Json<Vec<ExpenseRecord>>, ApiError> {
    let output = ExpenseProcessorInput::ListExpenses
        .process(&app_config)
        .await
        .map_err(|e| ApiError::from_expense_error(e, "Database error"))?;

    match output {
        ExpenseProcessorOutput::ListExpenses(expenses) => Ok(Json(expenses)),
        _ => Err(ApiError::database_error("Unexpected response type")),
    }
}

/// POST /api/expenses - Validate and store a new expense
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    ExpensePayload(raw): ExpensePayload,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    let output = ExpenseProcessorInput::CreateExpense(raw)
        .process(&app_config)
        .await
        .map_err(|e| ApiError::from_expense_error(e, "Error adding expense"))?;

    match output {
        ExpenseProcessorOutput::CreateExpense(record) => Ok((StatusCode::CREATED, Json(record))),
        _ => Err(ApiError::database_error("Unexpected response type")),
    }
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    ExpenseId(expense_id): ExpenseId,
) -> Result<StatusCode, ApiError> {
    ExpenseProcessorInput::DeleteExpense(expense_id)
        .process(&app_config)
        .await
        .map_err(|e| ApiError::from_expense_error(e, "Error deleting expense"))?;

    Ok(StatusCode::NO_CONTENT)
}
