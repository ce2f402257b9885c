pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::expenses::{create_expense, delete_expense, get_expenses};
use crate::utils::app_config::AppConfig;
use crate::web_ui;

pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        .merge(web_ui::router())
        .route("/api/expenses", get(get_expenses).post(create_expense))
        .route("/api/expenses/:id", delete(delete_expense))
        .layer(TraceLayer::new_for_http())
        .with_state(app_config)
}
