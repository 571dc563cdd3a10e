//! User CRUD against PostgreSQL. Each call runs a single autocommitted statement on the
//! caller's connection; the caller owns the connection for the length of the request.

use crate::error::AppError;
use crate::schema::{User, UserCreate};
use sqlx::PgConnection;

const SELECT_ALL: &str = "SELECT id, name FROM users ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name) VALUES ($1) RETURNING id, name";
const UPDATE_BY_ID: &str = "UPDATE users SET name = $1 WHERE id = $2 RETURNING id, name";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = $1";

pub struct UserService;

impl UserService {
    /// All users, ascending by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let users = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;
        Ok(users)
    }

    /// Fetch one user by id. Absence is `None`, not an error.
    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Insert one user; the store assigns the id. Returns the created row.
    pub async fn create(conn: &mut PgConnection, body: &UserCreate) -> Result<User, AppError> {
        tracing::debug!(sql = %INSERT, "query");
        let user = sqlx::query_as::<_, User>(INSERT)
            .bind(&body.name)
            .fetch_one(&mut *conn)
            .await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Overwrite every field of an existing user and return the row as stored.
    /// If the row vanished after the caller resolved it, `sqlx::Error::RowNotFound` propagates.
    pub async fn update(conn: &mut PgConnection, user: &User, body: &UserCreate) -> Result<User, AppError> {
        tracing::debug!(sql = %UPDATE_BY_ID, id = user.id, "query");
        let updated = sqlx::query_as::<_, User>(UPDATE_BY_ID)
            .bind(&body.name)
            .bind(user.id)
            .fetch_one(&mut *conn)
            .await?;
        tracing::info!(user_id = updated.id, "user updated");
        Ok(updated)
    }

    /// Delete the given user by its id.
    pub async fn delete(conn: &mut PgConnection, user: &User) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE_BY_ID, id = user.id, "query");
        let result = sqlx::query(DELETE_BY_ID)
            .bind(user.id)
            .execute(&mut *conn)
            .await?;
        tracing::info!(user_id = user.id, rows = result.rows_affected(), "user deleted");
        Ok(())
    }
}
