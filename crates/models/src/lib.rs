//! Concrete models.
//!
//! Each model embeds a [`skillfolio_core::BaseModel`] and adds its own
//! declared fields; the lifecycle (`save`, `delete`, export/import) comes from
//! the core traits.

pub mod any;
pub mod skills;

pub use any::AnyModel;
pub use skills::Skills;
