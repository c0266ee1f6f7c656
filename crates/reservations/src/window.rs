use chrono::NaiveDateTime;

use portal_core::{DomainError, DomainResult};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a `YYYY-MM-DD` date and `HH:MM` time pair into a local date-time.
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date.trim(), time.trim()), DATE_TIME_FORMAT).ok()
}

/// Closed time interval occupied by a reservation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReservationWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ReservationWindow {
    /// A window may be empty (`start == end`) but never inverted.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::validation("End time must be after start time"));
        }
        Ok(Self { start, end })
    }

    /// Window of a persisted record, kept as written even when inverted so that
    /// legacy records still block their vehicle.
    pub fn from_stored(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse both ends from their date/time string parts.
    pub fn parse(start_date: &str, start_time: &str, end_date: &str, end_time: &str) -> DomainResult<Self> {
        let start = parse_date_time(start_date, start_time)
            .ok_or_else(|| DomainError::validation("Invalid start date/time format"))?;
        let end = parse_date_time(end_date, end_time)
            .ok_or_else(|| DomainError::validation("Invalid end date/time format"))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Both ends are inclusive: a booking ending at 10:00 collides with one starting at 10:00.
    pub fn overlaps(&self, other: &ReservationWindow) -> bool {
        !(self.end < other.start || self.start > other.end)
    }
}
