use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use portal_auth::{CredentialError, TokenError};
use portal_core::DomainError;
use portal_infra::StoreError;
use portal_trips::MailError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Failed to send email: {0}")]
    Mail(#[from] MailError),

    #[error("background task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(e) => domain_error_to_response(e),
            ApiError::Credentials(CredentialError::InvalidCredentials) => {
                json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", "Invalid credentials")
            }
            ApiError::Credentials(CredentialError::Domain(e)) => domain_error_to_response(e),
            ApiError::Store(e) | ApiError::Credentials(CredentialError::Store(e)) => {
                tracing::error!(error = %e, "document store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
            ApiError::Token(e) => {
                tracing::error!(error = %e, "token issue failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "token_error", e.to_string())
            }
            err @ ApiError::Mail(_) => {
                tracing::error!(error = %err, "trip report delivery failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "mail_error", err.to_string())
            }
            ApiError::Task(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "task_error", msg),
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        e @ DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", e.to_string()),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
    }
}

pub fn json_rejection(rej: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_json", rej.body_text())
}

pub fn form_rejection(rej: FormRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_form", rej.body_text())
}

pub fn query_rejection(rej: QueryRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_query", rej.body_text())
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
