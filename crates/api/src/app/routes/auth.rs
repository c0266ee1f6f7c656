use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use portal_auth::CredentialError;

use crate::app::errors::{self, ApiError};
use crate::app::{dto, services::AppServices};

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    let authenticated = {
        let (username, password) = (body.username.clone(), body.password.clone());
        services
            .blocking(move |s| Ok(s.credentials.authenticate(&username, &password)?))
            .await
    };
    let is_default = match authenticated {
        Ok(d) => d,
        Err(e) => return e.into_response(),
    };

    let (token, _claims) = match services.tokens.issue(&body.username, Utc::now()) {
        Ok(t) => t,
        Err(e) => return ApiError::from(e).into_response(),
    };

    if is_default {
        tracing::warn!(username = %body.username, "admin logged in with default credentials");
    } else {
        tracing::info!(username = %body.username, "admin logged in");
    }

    Json(dto::LoginResponse {
        token,
        is_default_credentials: is_default,
    })
    .into_response()
}

pub async fn update_credentials(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::UpdateCredentialsRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    let updated = services
        .blocking(move |s| {
            Ok(s.credentials.update(
                &body.current_username,
                &body.current_password,
                &body.new_username,
                &body.new_password,
            )?)
        })
        .await;

    match updated {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(ApiError::Credentials(CredentialError::InvalidCredentials)) => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Invalid current credentials",
        ),
        Err(e) => e.into_response(),
    }
}
