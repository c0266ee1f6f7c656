use axum::{Extension, Json, response::IntoResponse};

use crate::context::AdminContext;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn whoami(Extension(admin): Extension<AdminContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "username": admin.username(),
        "expires_at": admin.expires_at(),
    }))
}
