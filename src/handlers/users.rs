//! User CRUD handlers. Each handler validates its inputs first, then checks out one pooled
//! connection that is returned to the pool when the handler finishes, however it finishes.

use crate::error::{AppError, ErrorBody};
use crate::response::{self, MessageBody};
use crate::schema::{User, UserCreate};
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Redirect},
    Json,
};

pub const LIST_PATH: &str = "/allUsers/";

pub async fn root() -> Redirect {
    Redirect::temporary(LIST_PATH)
}

#[utoipa::path(
    get,
    path = "/allUsers/",
    tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = [User]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let users = UserService::list(&mut conn).await?;
    Ok(response::ok(users))
}

#[utoipa::path(
    get,
    path = "/findUsers/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let mut conn = state.pool.acquire().await?;
    let user = UserService::get(&mut conn, user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    Ok(response::ok(user))
}

#[utoipa::path(
    post,
    path = "/createUsers/",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "The created user with its assigned id", body = User),
        (status = 422, description = "Body is not a valid user", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserCreate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let mut conn = state.pool.acquire().await?;
    let user = UserService::create(&mut conn, &body).await?;
    Ok(response::ok(user))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UserCreate,
    responses(
        (status = 200, description = "The user after every field was overwritten", body = User),
        (status = 404, description = "No user with this id", body = ErrorBody),
        (status = 422, description = "Bad id or body", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserCreate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let Json(body) = body?;
    let mut conn = state.pool.acquire().await?;
    let existing = UserService::get(&mut conn, user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    let user = UserService::update(&mut conn, &existing, &body).await?;
    Ok(response::ok(user))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user was deleted", body = MessageBody),
        (status = 404, description = "No user with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;
    let mut conn = state.pool.acquire().await?;
    let existing = UserService::get(&mut conn, user_id)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    UserService::delete(&mut conn, &existing).await?;
    Ok(response::message("User deleted successfully"))
}
