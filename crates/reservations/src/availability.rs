//! Linear-scan conflict detection against the stored reservations.

use crate::reservation::Reservation;
use crate::window::ReservationWindow;

/// First reservation of `vehicle` whose window overlaps `window`.
///
/// Stored records with unparsable dates are skipped; inverted ones are still checked. `ignore_id` excludes the
/// reservation currently being edited.
pub fn find_conflict<'a>(
    existing: &'a [Reservation],
    vehicle: &str,
    window: &ReservationWindow,
    ignore_id: Option<&str>,
) -> Option<&'a Reservation> {
    existing
        .iter()
        .filter(|res| res.vehicle == vehicle)
        .filter(|res| ignore_id != Some(res.id.as_str()))
        .find(|res| res.window().is_some_and(|w| w.overlaps(window)))
}

pub fn is_available(
    existing: &[Reservation],
    vehicle: &str,
    window: &ReservationWindow,
    ignore_id: Option<&str>,
) -> bool {
    find_conflict(existing, vehicle, window, ignore_id).is_none()
}
