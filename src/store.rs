//! Pool construction and startup DDL. The `users` table is created if absent; there is no
//! migration history.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Arbitrary key for the advisory lock that serializes table creation across starters.
const SCHEMA_LOCK_KEY: i64 = 0x7573_6572_735f_6170;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

pub async fn create_pool(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Create the `users` table if it does not exist. Safe to call from several processes at once.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_USERS_TABLE).execute(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!("users table ready");
    Ok(())
}

/// Whether the `users` table is visible on the search path.
pub async fn users_table_exists(pool: &PgPool) -> Result<bool, AppError> {
    let (exists,): (bool,) = sqlx::query_as("SELECT to_regclass('users') IS NOT NULL")
        .fetch_one(pool)
        .await?;
    Ok(exists)
}

/// Create the database named in `database_url` if it does not exist, via the server's `postgres` database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Split a connection URL into (URL of the `postgres` maintenance database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url
        .find("://")
        .ok_or_else(|| ConfigError::DatabaseUrl("missing scheme".into()))?
        + 3;
    let (base, path_and_query) = match url[scheme_end..].find('/') {
        Some(i) => url.split_at(scheme_end + i + 1),
        None => return Ok((url.to_string(), String::new())),
    };
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
