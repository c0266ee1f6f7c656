use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;

use portal_core::{DomainError, position_by_id};
use portal_infra::DocumentStore;
use portal_reservations::{
    NewReservation, Reservation, ReservationWindow, find_conflict, is_available, retain_active, to_calendar_events,
    validate_new,
};

use crate::app::errors::{self, ApiError};
use crate::app::{dto, services::AppServices};

const SLOT_TAKEN: &str = "Selected time slot is not available";

fn ensure_free(existing: &[Reservation], res: &Reservation, window: &ReservationWindow, ignore: Option<&str>) -> Result<(), ApiError> {
    if let Some(other) = find_conflict(existing, &res.vehicle, window, ignore) {
        tracing::info!(vehicle = %res.vehicle, conflicting = %other.id, "reservation rejected, slot taken");
        return Err(DomainError::conflict(SLOT_TAKEN).into());
    }
    Ok(())
}

/// Calendar feed. Expired bookings are purged on the way.
pub async fn list_reservations(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let now = Local::now().naive_local();
    let result = services
        .blocking(move |s| {
            s.reservations.modify(|list| {
                let removed = retain_active(list, now);
                Ok::<_, ApiError>((to_calendar_events(list), removed))
            })
        })
        .await;

    match result {
        Ok((events, removed)) => {
            if removed > 0 {
                tracing::info!(removed, "purged expired reservations");
            }
            Json(events).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn create_reservation(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewReservation>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    // Check and insert under the store lock so concurrent requests cannot double-book.
    let created = services
        .blocking(move |s| {
            s.reservations.modify(|list| {
                let window = validate_new(&req)?;
                let res = req.into_new_reservation();
                ensure_free(list, &res, &window, None)?;
                list.push(res.clone());
                Ok::<_, ApiError>(res)
            })
        })
        .await;

    match created {
        Ok(res) => {
            tracing::info!(id = %res.id, vehicle = %res.vehicle, driver = %res.driver_name, "reservation created");
            (StatusCode::CREATED, Json(res)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn check_availability(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::AvailabilityQuery>, QueryRejection>,
) -> Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(rej) => return errors::query_rejection(rej),
    };

    if !q.is_complete() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "Missing required parameters");
    }

    let window = match ReservationWindow::parse(&q.start_date, &q.start_time, &q.end_date, &q.end_time) {
        Ok(w) => w,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.blocking(|s| Ok(s.reservations.load()?)).await {
        Ok(list) => {
            let available = is_available(&list, q.vehicle.trim(), &window, None);
            Json(serde_json::json!({ "available": available })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn update_reservation(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<NewReservation>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection(rej),
    };

    let updated = services
        .blocking(move |s| {
            s.reservations.modify(|list| {
                let idx = position_by_id(list, &id).ok_or_else(|| DomainError::not_found("Reservation"))?;
                let window = validate_new(&req)?;
                let res = req.into_reservation(id.clone());
                ensure_free(list, &res, &window, Some(id.as_str()))?;
                list[idx] = res.clone();
                Ok::<_, ApiError>(res)
            })
        })
        .await;

    match updated {
        Ok(res) => {
            tracing::info!(id = %res.id, vehicle = %res.vehicle, "reservation updated");
            Json(res).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn delete_reservation(Extension(services): Extension<Arc<AppServices>>, Path(id): Path<String>) -> Response {
    let removed = services
        .blocking(move |s| {
            s.reservations.modify(|list| {
                let idx = position_by_id(list, &id).ok_or_else(|| DomainError::not_found("Reservation"))?;
                Ok::<_, ApiError>(list.remove(idx))
            })
        })
        .await;

    match removed {
        Ok(res) => {
            tracing::info!(id = %res.id, vehicle = %res.vehicle, "reservation deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
