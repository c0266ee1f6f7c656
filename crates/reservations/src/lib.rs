//! Vehicle reservation domain module.
//!
//! Business rules for the reservation calendar: parsing booking windows,
//! detecting overlaps between bookings of the same vehicle, and pruning
//! expired bookings. Pure domain logic (no IO, no HTTP, no storage).

pub mod availability;
pub mod calendar;
pub mod reservation;
pub mod window;

pub use availability::{find_conflict, is_available};
pub use calendar::{CalendarEvent, RETENTION_HOURS, retain_active, to_calendar_events};
pub use reservation::{NewReservation, Reservation, validate_new};
pub use window::{ReservationWindow, parse_date_time};
