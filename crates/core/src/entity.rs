//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stored portal records are identified by plain strings (see [`crate::RecordId`]).
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &str;
}

/// Index of the entity with `id`, if present.
pub fn position_by_id<E: Entity>(items: &[E], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &str) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}
