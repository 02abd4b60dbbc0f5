//! Entity trait: identity + continuity across state changes.
//!
//! Entities are compared **by identity** (their id), never by attribute
//! values: two persons who share a display name are still two persons.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
