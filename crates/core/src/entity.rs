//! Entity trait: identity + lifecycle timestamps.

use chrono::{DateTime, Utc};

/// A persisted domain object with identity and timestamps.
///
/// Every [`crate::Model`] is an entity through a blanket impl; the trait exists
/// on its own so read-only code can ask for identity without pulling in the
/// (de)serialization surface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Set once at construction, never changed.
    fn created_at(&self) -> DateTime<Utc>;

    /// Bumped every time the entity is saved. Never earlier than `created_at`.
    fn updated_at(&self) -> DateTime<Utc>;
}
