//! OpenAPI document for the user endpoints, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::response::MessageBody;
use crate::schema::{User, UserCreate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "users-api"),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user
    ),
    components(schemas(User, UserCreate, MessageBody, ErrorBody, ErrorDetail)),
    tags((name = "users", description = "User CRUD"))
)]
pub struct ApiDoc;
