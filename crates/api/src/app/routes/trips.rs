use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};

use portal_trips::{TripEntry, compose_report};

use crate::app::errors::{self, ApiError};
use crate::app::services::AppServices;

/// Trip log form: validate, render the report and mail it.
pub async fn submit_trip(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TripEntry>, JsonRejection>,
) -> Response {
    let Json(entry) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    if let Err(e) = entry.validate() {
        tracing::info!(driver = %entry.name, error = %e, "trip entry rejected");
        return errors::domain_error_to_response(e);
    }

    let report = compose_report(&entry);
    let mailer = Arc::clone(&services.mailer);
    let sent = tokio::task::spawn_blocking(move || mailer.send(&report)).await;

    match sent {
        Ok(Ok(())) => {
            tracing::info!(
                driver = %entry.name,
                vehicle = %entry.vehicle,
                km = entry.distance_km(),
                "trip report sent"
            );
            Json(serde_json::json!({ "message": "Záznam byl úspěšně uložen a email odeslán" })).into_response()
        }
        Ok(Err(e)) => ApiError::from(e).into_response(),
        Err(e) => ApiError::Task(e.to_string()).into_response(),
    }
}
