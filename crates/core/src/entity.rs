//! Entity trait: records identified by id rather than by value.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same record when their ids match, whatever their attributes.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
