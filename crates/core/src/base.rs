//! Shared base fields: identity and lifecycle timestamps.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};
use crate::id::ModelId;
use crate::model::{AttributeMap, Model, take_string};
use crate::timestamp;

/// Identity and timestamps embedded in every model.
///
/// Also a model in its own right (`__class__ = "BaseModel"`) with no declared
/// fields. Entries of a rebuilt mapping that no model declares are kept in
/// `extra` and exported again unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseModel {
    id: ModelId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    extra: AttributeMap,
}

impl BaseModel {
    /// Fresh identity; both timestamps set to the same current instant.
    pub fn new() -> Self {
        let now = timestamp::now();
        Self {
            id: ModelId::new(),
            created_at: now,
            updated_at: now,
            extra: AttributeMap::new(),
        }
    }

    /// Restore previously persisted base fields.
    ///
    /// Both timestamps must fall within [`timestamp::ensure_in_range`].
    pub fn restore(
        id: ModelId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> ModelResult<Self> {
        let created_at = timestamp::ensure_in_range(created_at)?;
        let updated_at = timestamp::ensure_in_range(updated_at)?;
        if created_at > updated_at {
            return Err(ModelError::invariant(format!(
                "created_at ({}) is later than updated_at ({})",
                timestamp::format(&created_at),
                timestamp::format(&updated_at)
            )));
        }
        Ok(Self {
            id,
            created_at: timestamp::truncate(created_at),
            updated_at: timestamp::truncate(updated_at),
            extra: AttributeMap::new(),
        })
    }

    /// Move `updated_at` to now.
    ///
    /// Strictly increases, even when the clock has not advanced by a full
    /// microsecond since the last bump. Saturates at chrono's maximum.
    pub fn touch(&mut self) {
        let next = self
            .updated_at
            .checked_add_signed(TimeDelta::microseconds(1))
            .unwrap_or(self.updated_at);
        self.updated_at = timestamp::now().max(next);
    }

    /// Attributes carried over from a rebuilt mapping that no model declares.
    pub fn extra(&self) -> &AttributeMap {
        &self.extra
    }

    pub(crate) fn set_extra(&mut self, extra: AttributeMap) {
        self.extra = extra;
    }

    pub(crate) fn model_id(&self) -> &ModelId {
        &self.id
    }

    pub(crate) fn created(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn updated(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn base_attributes(&self) -> AttributeMap {
        let mut map = AttributeMap::new();
        map.insert("id".to_string(), Value::String(self.id.to_string()));
        map.insert(
            "created_at".to_string(),
            Value::String(timestamp::format(&self.created_at)),
        );
        map.insert(
            "updated_at".to_string(),
            Value::String(timestamp::format(&self.updated_at)),
        );
        map
    }

    /// Remove and parse the base fields out of an attribute mapping.
    pub(crate) fn take_from(map: &mut AttributeMap) -> ModelResult<Self> {
        let id = take_string(map, "id")?.parse::<ModelId>()?;
        let created_at = timestamp::parse(&take_string(map, "created_at")?)?;
        let updated_at = timestamp::parse(&take_string(map, "updated_at")?)?;
        Self::restore(id, created_at, updated_at)
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for BaseModel {
    const CLASS_NAME: &'static str = "BaseModel";

    fn base(&self) -> &BaseModel {
        self
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        self
    }

    fn fields(&self) -> AttributeMap {
        AttributeMap::new()
    }

    fn rebuild(base: BaseModel, _fields: &mut AttributeMap) -> ModelResult<Self> {
        Ok(base)
    }
}

impl core::fmt::Display for BaseModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
