use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::env;

use expense_tracker::api::{config::ApiConfig, router};
use expense_tracker::utils::{
    app_config::AppConfig,
    db::{DbConfig, provision},
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let db_config = DbConfig::parse();
    let api_config = ApiConfig::from_env();
    tracing::info!("Configuration loaded for database '{}'", db_config.db_name);

    let pool = match provision(&db_config) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Error while provisioning the database: {:#}", e);
            return Err(e);
        }
    };

    let app_config = AppConfig::from_pool(pool);
    let router = router(app_config);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting expense tracker on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
