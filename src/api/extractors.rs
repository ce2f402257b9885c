use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::expenses::validation::RawExpenseInput;

/// JSON body of a create request. Rejections come back as `{"error": ...}` with 400.
pub struct ExpensePayload(pub RawExpenseInput);

#[async_trait]
impl<S> FromRequest<S> for ExpensePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        if !value.is_object() {
            return Err(ApiError::bad_request("Request body must be a JSON object"));
        }

        let raw = serde_json::from_value::<RawExpenseInput>(value)
            .map_err(|e| ApiError::bad_request(format!("Invalid data format: {}", e)))?;

        Ok(ExpensePayload(raw))
    }
}

/// Integer `{id}` path segment. Anything else does not address an expense.
pub struct ExpenseId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("Expense"))?;

        raw.parse::<i32>()
            .map(ExpenseId)
            .map_err(|_| ApiError::not_found(format!("Expense {}", raw)))
    }
}
