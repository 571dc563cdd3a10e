//! users-api: REST CRUD for a single `users` table on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, user_routes};
pub use schema::{User, UserCreate};
pub use service::UserService;
pub use state::AppState;
pub use store::{create_pool, ensure_database_exists, ensure_schema, users_table_exists};
