use serde::{Deserialize, Serialize};

use portal_core::{DomainError, DomainResult, Entity, RecordId};

use crate::window::{ReservationWindow, parse_date_time};

/// A vehicle booking as persisted in the reservation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub id: String,
    pub driver_name: String,
    pub vehicle: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub purpose: String,
}

impl Reservation {
    /// Booking window, or `None` when the stored dates are malformed.
    pub fn window(&self) -> Option<ReservationWindow> {
        let start = parse_date_time(&self.start_date, &self.start_time)?;
        let end = parse_date_time(&self.end_date, &self.end_time)?;
        Some(ReservationWindow::from_stored(start, end))
    }
}

impl Entity for Reservation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reservation payload as submitted by the calendar form.
///
/// Missing fields deserialize as empty strings so that validation, not JSON
/// decoding, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewReservation {
    pub driver_name: String,
    pub vehicle: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub purpose: String,
}

impl NewReservation {
    pub fn into_reservation(self, id: impl Into<String>) -> Reservation {
        Reservation {
            id: id.into(),
            driver_name: self.driver_name.trim().to_string(),
            vehicle: self.vehicle.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
        }
    }

    /// Assign a fresh `res_<nanos>` identifier.
    pub fn into_new_reservation(self) -> Reservation {
        self.into_reservation(RecordId::generate("res"))
    }
}

/// Check required fields, date formats and ordering; returns the requested window.
pub fn validate_new(req: &NewReservation) -> DomainResult<ReservationWindow> {
    let required = [
        &req.driver_name,
        &req.vehicle,
        &req.start_date,
        &req.start_time,
        &req.end_date,
        &req.end_time,
    ];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(DomainError::validation("Missing required fields"));
    }

    ReservationWindow::parse(&req.start_date, &req.start_time, &req.end_date, &req.end_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewReservation {
        NewReservation {
            driver_name: "Jan Novák".to_string(),
            vehicle: "Škoda Octavia".to_string(),
            start_date: "2025-03-05".to_string(),
            start_time: "08:00".to_string(),
            end_date: "2025-03-05".to_string(),
            end_time: "12:00".to_string(),
            purpose: String::new(),
        }
    }

    #[test]
    fn valid_request_yields_window() {
        let w = validate_new(&request()).unwrap();
        assert_eq!(w.start().to_string(), "2025-03-05 08:00:00");
        assert_eq!(w.end().to_string(), "2025-03-05 12:00:00");
    }

    #[test]
    fn missing_field_is_reported_before_format() {
        let mut req = request();
        req.vehicle = "  ".to_string();
        req.start_date = "garbage".to_string();
        let err = validate_new(&req).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn inverted_request_is_rejected() {
        let mut req = request();
        req.end_time = "07:00".to_string();
        assert!(validate_new(&req).is_err());
    }

    #[test]
    fn new_reservation_gets_prefixed_id() {
        let res = request().into_new_reservation();
        assert!(res.id.starts_with("res_"));
        assert_eq!(res.vehicle, "Škoda Octavia");
    }

    #[test]
    fn json_uses_camel_case_and_omits_empty_purpose() {
        let res = request().into_reservation("res_1");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["driverName"], "Jan Novák");
        assert_eq!(json["startDate"], "2025-03-05");
        assert!(json.get("purpose").is_none());
    }

    #[test]
    fn missing_json_fields_become_empty() {
        let req: NewReservation = serde_json::from_str(r#"{"vehicle":"Octavia"}"#).unwrap();
        assert_eq!(req.vehicle, "Octavia");
        assert!(req.driver_name.is_empty());
    }

    #[test]
    fn malformed_stored_dates_have_no_window() {
        let mut res = request().into_reservation("res_1");
        res.end_date = "2025-02-30".to_string();
        assert!(res.window().is_none());
    }

    #[test]
    fn inverted_stored_dates_keep_their_window() {
        let mut res = request().into_reservation("res_1");
        res.start_time = "10:00".to_string();
        res.end_date = res.start_date.clone();
        res.end_time = "08:00".to_string();
        let w = res.window().unwrap();
        assert!(w.end() < w.start());
    }
}
