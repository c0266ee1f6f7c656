//! Calendar projection and retention of reservations.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::reservation::Reservation;
use crate::window::parse_date_time;

/// Reservations stay visible this long after they end.
pub const RETENTION_HOURS: i64 = 48;

/// Event shape consumed by the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub driver_name: String,
    pub vehicle: String,
    pub purpose: String,
}

impl From<&Reservation> for CalendarEvent {
    fn from(res: &Reservation) -> Self {
        Self {
            id: res.id.clone(),
            title: format!("{} - {}", res.vehicle, res.driver_name),
            start: format!("{}T{}:00", res.start_date, res.start_time),
            end: format!("{}T{}:00", res.end_date, res.end_time),
            driver_name: res.driver_name.clone(),
            vehicle: res.vehicle.clone(),
            purpose: res.purpose.clone(),
        }
    }
}

pub fn to_calendar_events(reservations: &[Reservation]) -> Vec<CalendarEvent> {
    reservations.iter().map(CalendarEvent::from).collect()
}

/// Drop reservations that ended more than [`RETENTION_HOURS`] before `now`.
///
/// Records whose end cannot be parsed are dropped as well. Returns the number
/// of removed records.
pub fn retain_active(reservations: &mut Vec<Reservation>, now: NaiveDateTime) -> usize {
    let before = reservations.len();
    reservations.retain(|res| {
        parse_date_time(&res.end_date, &res.end_time)
            .is_some_and(|end| end + Duration::hours(RETENTION_HOURS) > now)
    });
    before - reservations.len()
}
