use std::sync::Arc;

use anyhow::Result;

use crate::expenses::store::{ExpenseStore, PgExpenseStore};
use crate::utils::db::{DbConfig, DbPool, build_pool};

/// Shared handle injected into every request handler.
#[derive(Clone)]
pub struct AppConfig {
    pub store: Arc<dyn ExpenseStore>,
}

impl AppConfig {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(Arc::new(PgExpenseStore::new(pool)))
    }

    /// Reads `DbConfig` from the environment (and `.env`) and opens the pool.
    pub fn from_env() -> Result<Self> {
        let db_config = DbConfig::from_env()?;
        Ok(Self::from_pool(build_pool(&db_config)?))
    }
}
