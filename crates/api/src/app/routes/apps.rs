use std::sync::Arc;

use axum::{
    Extension, Form, Json,
    extract::{Path, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use portal_content::{self as content, AppForm};
use portal_infra::DocumentStore;

use crate::app::errors::{self, ApiError};
use crate::app::services::AppServices;

/// Built-in apps followed by the ones added from the dashboard.
pub async fn list_apps(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.blocking(|s| Ok(s.apps.load()?)).await {
        Ok(stored) => Json(content::list_apps(&stored, Utc::now())).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_app(Extension(services): Extension<Arc<AppServices>>, Path(id): Path<String>) -> Response {
    let stored = match services.blocking(|s| Ok(s.apps.load()?)).await {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };
    match content::get_app(&stored, &id) {
        Ok(app) => Json(app).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_app(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<AppForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(f) => f,
        Err(rej) => return errors::form_rejection(rej),
    };

    let created = services
        .blocking(move |s| {
            s.apps
                .modify(|apps| content::create_app(apps, &form, Utc::now()).map_err(ApiError::from))
        })
        .await;

    match created {
        Ok(app) => {
            tracing::info!(id = %app.id, name = %app.name, "app created");
            (StatusCode::CREATED, Json(app)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn update_app(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    form: Result<Form<AppForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(f) => f,
        Err(rej) => return errors::form_rejection(rej),
    };

    let updated = services
        .blocking(move |s| {
            s.apps
                .modify(|apps| content::update_app(apps, &id, &form, Utc::now()).map_err(ApiError::from))
        })
        .await;

    match updated {
        Ok(app) => {
            tracing::info!(id = %app.id, "app updated");
            Json(app).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn delete_app(Extension(services): Extension<Arc<AppServices>>, Path(id): Path<String>) -> Response {
    let deleted = services
        .blocking(move |s| s.apps.modify(|apps| content::delete_app(apps, &id).map_err(ApiError::from)))
        .await;

    match deleted {
        Ok(app) => {
            tracing::info!(id = %app.id, "app deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
