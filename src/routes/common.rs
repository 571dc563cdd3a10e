//! Operational routes: liveness, readiness of the `users` table, API description and docs page.

use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::store::users_table_exists;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    users_table: Option<&'static str>,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Ready once the database answers and `users` has been created.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match users_table_exists(&state.pool).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
                users_table: Some("ok"),
            }),
        ),
        Ok(false) => {
            tracing::warn!("users table missing");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "ok",
                    users_table: Some("missing"),
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                    users_table: None,
                }),
            )
        }
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>users-api</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
</script>
</body>
</html>
"##;

/// Interactive docs: Swagger UI from the CDN, reading `/openapi.json`.
async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// GET /health, /ready, /openapi.json, /docs.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/openapi.json", get(openapi))
        .route("/docs", get(docs))
        .with_state(state)
}
