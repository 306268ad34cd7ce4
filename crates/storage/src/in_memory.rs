use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use skillfolio_core::{
    AttributeMap, CLASS_KEY, ModelId, Record, Storage, StorageError, StorageResult,
};
use skillfolio_models::AnyModel;

#[derive(Debug, Default)]
struct State {
    /// Staged by `new`, waiting for the next `save`.
    pending: BTreeMap<String, AttributeMap>,
    committed: BTreeMap<String, AttributeMap>,
}

/// In-memory storage for tests/dev.
///
/// Records are keyed by `<ClassName>.<id>` and held as exported mappings, so
/// what comes back out is exactly what a durable backend would have written.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: RwLock<State>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))
    }

    /// Number of committed records, optionally restricted to one class.
    pub fn count(&self, class: Option<&str>) -> StorageResult<usize> {
        let state = self.read()?;
        Ok(state
            .committed
            .values()
            .filter(|dict| matches_class(dict, class))
            .count())
    }

    /// Number of records staged since the last commit.
    pub fn pending_count(&self) -> StorageResult<usize> {
        Ok(self.read()?.pending.len())
    }

    /// Rebuild every committed record into its concrete model.
    pub fn reload(&self) -> StorageResult<Vec<AnyModel>> {
        let state = self.read()?;
        state
            .committed
            .values()
            .map(|dict| AnyModel::from_dict(dict.clone()).map_err(StorageError::from))
            .collect()
    }

    /// Rebuild one committed record.
    pub fn get_model(&self, class: &str, id: ModelId) -> StorageResult<Option<AnyModel>> {
        self.get(class, id)?
            .map(AnyModel::from_dict)
            .transpose()
            .map_err(StorageError::from)
    }
}

fn matches_class(dict: &AttributeMap, class: Option<&str>) -> bool {
    match class {
        None => true,
        Some(class) => matches!(dict.get(CLASS_KEY), Some(Value::String(c)) if c == class),
    }
}

impl Storage for InMemoryStorage {
    fn new(&self, record: &dyn Record) -> StorageResult<()> {
        let key = record.key();
        let dict = record.to_dict();
        self.write()?.pending.insert(key, dict);
        Ok(())
    }

    fn save(&self) -> StorageResult<()> {
        let mut state = self.write()?;
        let staged = std::mem::take(&mut state.pending);
        let staged_count = staged.len();
        state.committed.extend(staged);
        tracing::debug!(
            committed = staged_count,
            total = state.committed.len(),
            "in-memory storage commit"
        );
        Ok(())
    }

    // Deleting a record that was never saved is a no-op, not an error.
    fn delete(&self, record: &dyn Record) -> StorageResult<()> {
        let key = record.key();
        let mut state = self.write()?;
        let staged = state.pending.remove(&key).is_some();
        let committed = state.committed.remove(&key).is_some();
        if !staged && !committed {
            tracing::debug!(%key, "delete of unknown record ignored");
        }
        Ok(())
    }

    fn all(&self, class: Option<&str>) -> StorageResult<Vec<AttributeMap>> {
        let state = self.read()?;
        Ok(state
            .committed
            .values()
            .filter(|dict| matches_class(dict, class))
            .cloned()
            .collect())
    }

    fn get(&self, class: &str, id: ModelId) -> StorageResult<Option<AttributeMap>> {
        let key = format!("{class}.{id}");
        Ok(self.read()?.committed.get(&key).cloned())
    }
}
