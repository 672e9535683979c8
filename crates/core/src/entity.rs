//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identifier: two entities with the same id are
/// the same entity, whatever their attribute values. The `Display` bound keeps
/// identifiers printable wherever entities surface in logs or listings.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
