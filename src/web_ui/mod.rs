use axum::{
    Router,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

mod templates;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/static/script.js", get(script_handler))
}

async fn index_handler() -> Html<String> {
    Html(templates::index_page())
}

async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        templates::SCRIPT,
    )
}
