//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and cart lines are entities: two records with the same id refer to
/// the same catalog item even if their other attributes differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
