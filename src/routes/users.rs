//! User CRUD routes.

use crate::handlers::{create_user, delete_user, get_user, list_users, root, update_user};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

/// GET / redirects to the list. The collection paths answer with and without the trailing slash.
pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/allUsers/", get(list_users))
        .route("/allUsers", get(list_users))
        .route("/findUsers/:user_id", get(get_user))
        .route("/createUsers/", post(create_user))
        .route("/createUsers", post(create_user))
        .route("/users/:user_id", put(update_user).delete(delete_user))
        .with_state(state)
}
