//! Type-discriminator dispatch over every known model.

use serde_json::Value;
use skillfolio_core::{AttributeMap, BaseModel, CLASS_KEY, Model, ModelError, ModelResult, Record};

use crate::skills::Skills;

/// Any model that can come back out of storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyModel {
    BaseModel(BaseModel),
    Skills(Skills),
}

impl AnyModel {
    /// Class names accepted by [`AnyModel::from_dict`].
    pub const CLASSES: [&'static str; 2] = [BaseModel::CLASS_NAME, Skills::CLASS_NAME];

    /// Rebuild whichever model the mapping's `__class__` names.
    pub fn from_dict(map: AttributeMap) -> ModelResult<Self> {
        let class = match map.get(CLASS_KEY) {
            Some(Value::String(class)) => class.clone(),
            Some(_) => return Err(ModelError::invalid(CLASS_KEY, "expected a string")),
            None => return Err(ModelError::missing(CLASS_KEY)),
        };

        if class == BaseModel::CLASS_NAME {
            BaseModel::from_dict(map).map(Self::BaseModel)
        } else if class == Skills::CLASS_NAME {
            Skills::from_dict(map).map(Self::Skills)
        } else {
            Err(ModelError::unknown_class(class))
        }
    }

    pub fn is_known_class(class: &str) -> bool {
        Self::CLASSES.contains(&class)
    }

    pub fn as_record(&self) -> &dyn Record {
        match self {
            Self::BaseModel(m) => m as &dyn Record,
            Self::Skills(m) => m as &dyn Record,
        }
    }

    pub fn into_skills(self) -> Option<Skills> {
        match self {
            Self::Skills(m) => Some(m),
            _ => None,
        }
    }
}

impl From<BaseModel> for AnyModel {
    fn from(value: BaseModel) -> Self {
        Self::BaseModel(value)
    }
}

impl From<Skills> for AnyModel {
    fn from(value: Skills) -> Self {
        Self::Skills(value)
    }
}

impl core::fmt::Display for AnyModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BaseModel(m) => core::fmt::Display::fmt(m, f),
            Self::Skills(m) => core::fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skillfolio_core::Entity;

    #[test]
    fn dispatches_on_discriminator() {
        let skills = Skills::named("welding");
        let base = BaseModel::new();

        assert_eq!(AnyModel::from_dict(skills.to_dict()).unwrap(), AnyModel::Skills(skills));
        assert_eq!(AnyModel::from_dict(base.to_dict()).unwrap(), AnyModel::BaseModel(base));
    }

    #[test]
    fn requires_a_discriminator() {
        let attributes = Skills::new().attributes();
        assert_eq!(
            AnyModel::from_dict(attributes).unwrap_err(),
            ModelError::missing(CLASS_KEY)
        );
    }

    #[test]
    fn rejects_unknown_class() {
        let mut dict = Skills::new().to_dict();
        dict.insert(CLASS_KEY.to_string(), json!("Widget"));
        assert_eq!(
            AnyModel::from_dict(dict).unwrap_err(),
            ModelError::unknown_class("Widget")
        );
        assert!(!AnyModel::is_known_class("Widget"));
        assert!(AnyModel::is_known_class("Skills"));
    }

    #[test]
    fn record_view_matches_inner_model() {
        let skills = Skills::named("carpentry");
        let any = AnyModel::from(skills.clone());

        assert_eq!(any.as_record().key(), skills.key());
        assert_eq!(any.as_record().to_dict(), skills.to_dict());
        assert_eq!(any.to_string(), skills.to_string());
        assert_eq!(any.into_skills().map(|s| *s.id()), Some(*skills.id()));
    }

    #[test]
    fn preserves_timestamps_exactly() {
        use chrono::TimeZone;

        let created = chrono::Utc.with_ymd_and_hms(2017, 9, 28, 21, 3, 54).unwrap();
        let updated = created + chrono::Duration::microseconds(52_298);
        let base = BaseModel::restore(skillfolio_core::ModelId::new(), created, updated).unwrap();

        let rebuilt = AnyModel::from_dict(base.to_dict()).unwrap();
        let AnyModel::BaseModel(rebuilt) = rebuilt else {
            panic!("expected a BaseModel");
        };
        assert_eq!(rebuilt.created_at(), created);
        assert_eq!(rebuilt.updated_at(), updated);
    }
}
