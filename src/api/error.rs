use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::expenses::error::ExpenseError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    DatabaseError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::DatabaseError(msg.into())
    }

    /// Maps a service error, prefixing storage failures with what was being attempted.
    pub fn from_expense_error(err: ExpenseError, context: &str) -> Self {
        match err {
            ExpenseError::Validation(msg) => Self::BadRequest(msg),
            ExpenseError::NotFound(id) => Self::NotFound(format!("Expense {}", id)),
            ExpenseError::Storage(msg) => Self::DatabaseError(format!("{}: {}", context, msg)),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::DatabaseError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
