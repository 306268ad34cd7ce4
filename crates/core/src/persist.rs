//! Storage boundary and the save/delete lifecycle.
//!
//! The storage collaborator is always passed in explicitly. Models never reach
//! for a process-wide engine.

use std::sync::Arc;

use thiserror::Error;

use crate::error::ModelError;
use crate::id::ModelId;
use crate::model::{AttributeMap, Model, Record};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation error.
///
/// Returned by backends and propagated unchanged out of
/// [`Persistable::save`] / [`Persistable::delete`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Persistence engine consumed by models.
///
/// ## Semantics
///
/// - `new` stages a record (new or modified) for persistence.
/// - `save` commits everything staged so far.
/// - `delete` removes a record from the persisted set.
/// - `all` / `get` read committed records back as exported mappings.
pub trait Storage: Send + Sync {
    fn new(&self, record: &dyn Record) -> StorageResult<()>;

    fn save(&self) -> StorageResult<()>;

    fn delete(&self, record: &dyn Record) -> StorageResult<()>;

    /// Committed records, optionally restricted to one class.
    fn all(&self, class: Option<&str>) -> StorageResult<Vec<AttributeMap>>;

    fn get(&self, class: &str, id: ModelId) -> StorageResult<Option<AttributeMap>>;
}

impl<S> Storage for Arc<S>
where
    S: Storage + ?Sized,
{
    fn new(&self, record: &dyn Record) -> StorageResult<()> {
        (**self).new(record)
    }

    fn save(&self) -> StorageResult<()> {
        (**self).save()
    }

    fn delete(&self, record: &dyn Record) -> StorageResult<()> {
        (**self).delete(record)
    }

    fn all(&self, class: Option<&str>) -> StorageResult<Vec<AttributeMap>> {
        (**self).all(class)
    }

    fn get(&self, class: &str, id: ModelId) -> StorageResult<Option<AttributeMap>> {
        (**self).get(class, id)
    }
}

/// Lifecycle operations shared by every model.
pub trait Persistable: Record {
    /// Bump `updated_at`, stage this model, then commit.
    fn save<S: Storage + ?Sized>(&mut self, storage: &S) -> StorageResult<()>;

    /// Ask storage to remove this model.
    fn delete<S: Storage + ?Sized>(&self, storage: &S) -> StorageResult<()>;
}

impl<M: Model> Persistable for M {
    fn save<S: Storage + ?Sized>(&mut self, storage: &S) -> StorageResult<()> {
        self.base_mut().touch();
        tracing::debug!(key = %self.key(), "saving model");
        storage.new(&*self)?;
        storage.save()
    }

    fn delete<S: Storage + ?Sized>(&self, storage: &S) -> StorageResult<()> {
        tracing::debug!(key = %self.key(), "deleting model");
        storage.delete(self)
    }
}
