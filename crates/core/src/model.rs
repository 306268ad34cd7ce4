//! Model trait: attribute-mapping export/import shared by every entity.
//!
//! A model is a [`BaseModel`] plus its own declared fields. The shared
//! behavior (export with a type-discriminator, rebuild from a mapping, the
//! canonical string form) is written once here against four required items.

use serde_json::Value;

use crate::base::BaseModel;
use crate::entity::Entity;
use crate::error::{ModelError, ModelResult};
use crate::id::ModelId;

/// Reserved key naming the concrete model in an exported mapping.
pub const CLASS_KEY: &str = "__class__";

/// Attribute mapping (the persisted representation of a model).
pub type AttributeMap = serde_json::Map<String, Value>;

pub trait Model: Sized {
    /// Type-discriminator written to [`CLASS_KEY`].
    const CLASS_NAME: &'static str;

    fn base(&self) -> &BaseModel;

    fn base_mut(&mut self) -> &mut BaseModel;

    /// Declared fields in export form. Unset fields are omitted.
    fn fields(&self) -> AttributeMap;

    /// Rebuild from restored base fields, taking declared fields out of
    /// `fields`.
    ///
    /// `fields` no longer contains `id`, the timestamps, or [`CLASS_KEY`].
    /// Whatever is left in it afterwards is kept as extra attributes.
    fn rebuild(base: BaseModel, fields: &mut AttributeMap) -> ModelResult<Self>;

    /// Live attribute set: extra, base and declared fields, no discriminator.
    fn attributes(&self) -> AttributeMap {
        let mut attributes = self.base().extra().clone();
        attributes.extend(self.base().base_attributes());
        attributes.extend(self.fields());
        attributes
    }

    /// Rebuild a model from an exported (or live) attribute mapping.
    ///
    /// The discriminator is optional, but when present it must name this
    /// model. Id and timestamps are restored as-is, never regenerated. Entries
    /// the model does not declare are carried along unchanged.
    fn from_dict(mut map: AttributeMap) -> ModelResult<Self> {
        if let Some(class) = map.remove(CLASS_KEY) {
            match class.as_str() {
                Some(name) if name == Self::CLASS_NAME => {}
                Some(name) => return Err(ModelError::class_mismatch(Self::CLASS_NAME, name)),
                None => return Err(ModelError::invalid(CLASS_KEY, "expected a string")),
            }
        }
        let base = BaseModel::take_from(&mut map)?;
        let mut model = Self::rebuild(base, &mut map)?;
        model.base_mut().set_extra(map);
        Ok(model)
    }

    /// Canonical string form: `[<ClassName>.<id>] <attributes>`.
    fn describe(&self) -> String {
        format!(
            "[{}.{}] {}",
            Self::CLASS_NAME,
            self.base().model_id(),
            Value::Object(self.attributes())
        )
    }
}

impl<M: Model> Entity for M {
    type Id = ModelId;

    fn id(&self) -> &ModelId {
        self.base().model_id()
    }

    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.base().created()
    }

    fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.base().updated()
    }
}

/// Object-safe view of a model, as handed to a [`crate::Storage`].
pub trait Record {
    fn class_name(&self) -> &'static str;

    fn record_id(&self) -> ModelId;

    /// Exported mapping: attributes plus [`CLASS_KEY`].
    fn to_dict(&self) -> AttributeMap;

    /// Storage key, `<ClassName>.<id>`.
    fn key(&self) -> String {
        format!("{}.{}", self.class_name(), self.record_id())
    }
}

impl<M: Model> Record for M {
    fn class_name(&self) -> &'static str {
        M::CLASS_NAME
    }

    fn record_id(&self) -> ModelId {
        *self.base().model_id()
    }

    fn to_dict(&self) -> AttributeMap {
        let mut dict = self.attributes();
        dict.insert(CLASS_KEY.to_string(), Value::String(M::CLASS_NAME.to_string()));
        dict
    }
}

/// Remove a required string attribute.
pub fn take_string(map: &mut AttributeMap, field: &str) -> ModelResult<String> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ModelError::invalid(field, format!("expected a string, got {other}"))),
        None => Err(ModelError::missing(field)),
    }
}

/// Remove an optional string attribute; absent and `null` both map to `None`.
pub fn take_optional_string(map: &mut AttributeMap, field: &str) -> ModelResult<Option<String>> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(ModelError::invalid(field, format!("expected a string, got {other}"))),
    }
}
