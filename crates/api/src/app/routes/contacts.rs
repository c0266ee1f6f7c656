use std::sync::Arc;

use axum::{
    Extension, Json,
    response::{IntoResponse, Response},
};

use portal_contacts::RefreshOutcome;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn get_contacts(Extension(services): Extension<Arc<AppServices>>) -> Response {
    Json(services.contacts.snapshot()).into_response()
}

/// Re-check the spreadsheet now instead of waiting for the watcher.
pub async fn reload_contacts(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let directory = Arc::clone(&services.contacts);
    let outcome = match tokio::task::spawn_blocking(move || directory.refresh()).await {
        Ok(o) => o,
        Err(e) => return ApiError::Task(e.to_string()).into_response(),
    };

    if let RefreshOutcome::Failed(reason) = &outcome {
        tracing::warn!(%reason, "manual contact reload could not parse the spreadsheet");
    }

    Json(serde_json::json!({
        "status": "reloaded",
        "contacts_count": services.contacts.total(),
    }))
    .into_response()
}
