use anyhow::{Result, anyhow};
use clap::Parser;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::sql_types::Text;
use diesel::{PgConnection, sql_query};

use crate::expenses::db_types::{CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

const MAINTENANCE_DATABASE: &str = "postgres";

#[derive(Parser, Debug, Clone)]
#[command(name = "expense-tracker", about = "Expense tracking API server")]
pub struct DbConfig {
    #[clap(long, env, default_value = "postgres")]
    pub db_user: String,
    #[clap(long, env, default_value = "password", hide_env_values = true)]
    pub db_password: String,
    #[clap(long, env, default_value = "localhost")]
    pub db_host: String,
    #[clap(long, env, default_value_t = 5432)]
    pub db_port: u16,
    #[clap(long, env, default_value = "expense_tracker")]
    pub db_name: String,
    #[clap(long, env, default_value_t = 10)]
    pub db_pool_size: u32,
    /// Full connection URL; takes precedence over the individual parts
    #[clap(long, env, hide_env_values = true)]
    pub database_url: Option<String>,
}

impl DbConfig {
    /// Environment only, ignoring process arguments.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Ok(Self::try_parse_from([env!("CARGO_PKG_NAME")])?)
    }

    fn server_url(&self, database: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, database
        )
    }

    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => self.server_url(&self.db_name),
        }
    }

    pub fn maintenance_url(&self) -> String {
        self.server_url(MAINTENANCE_DATABASE)
    }
}

pub fn build_pool(db_config: &DbConfig) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(db_config.database_url());
    let pool = Pool::builder()
        .max_size(db_config.db_pool_size)
        .build(manager)?;

    Ok(pool)
}

pub fn get_conn(pool: &DbPool) -> Result<DbConn, r2d2::PoolError> {
    pool.get()
}

/// Database names are spliced into DDL, so only plain identifiers are accepted.
pub fn validate_database_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') || name.len() > 63 {
        return Err(anyhow!("invalid database name: {:?}", name));
    }
    Ok(())
}

pub fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS expenses (\
            id SERIAL PRIMARY KEY, \
            amount DOUBLE PRECISION NOT NULL, \
            category VARCHAR({}) NOT NULL, \
            date DATE NOT NULL, \
            description VARCHAR({}) NOT NULL DEFAULT ''\
        )",
        CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN
    )
}

#[derive(QueryableByName)]
struct DatabaseRow {
    #[diesel(sql_type = Text)]
    #[allow(dead_code)]
    datname: String,
}

/// Creates the configured database when it does not exist yet.
pub fn ensure_database(db_config: &DbConfig) -> Result<()> {
    validate_database_name(&db_config.db_name)?;
    let mut conn = PgConnection::establish(&db_config.maintenance_url())?;

    let existing = sql_query("SELECT datname FROM pg_database WHERE datname = $1")
        .bind::<Text, _>(db_config.db_name.as_str())
        .load::<DatabaseRow>(&mut conn)?;

    if existing.is_empty() {
        sql_query(format!("CREATE DATABASE \"{}\"", db_config.db_name)).execute(&mut conn)?;
        tracing::info!("Database '{}' created", db_config.db_name);
    } else {
        tracing::info!("Database '{}' already exists", db_config.db_name);
    }

    Ok(())
}

pub fn ensure_schema(pool: &DbPool) -> Result<()> {
    let mut conn = get_conn(pool)?;
    sql_query(create_table_sql()).execute(&mut conn)?;
    tracing::info!("Database tables ready");
    Ok(())
}

/// Idempotent startup provisioning: database (unless an explicit URL is given), pool, then table.
pub fn provision(db_config: &DbConfig) -> Result<DbPool> {
    if db_config.database_url.is_none() {
        ensure_database(db_config)?;
    }
    let pool = build_pool(db_config)?;
    ensure_schema(&pool)?;
    Ok(pool)
}
