//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and handed to every handler. Handlers check out one
/// connection per request from `pool`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
