use skillfolio_core::model::take_optional_string;
use skillfolio_core::{AttributeMap, BaseModel, Model, ModelResult};

/// A named skill.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skills {
    base: BaseModel,
    name: Option<String>,
}

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }
}

impl Model for Skills {
    const CLASS_NAME: &'static str = "Skills";

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn fields(&self) -> AttributeMap {
        let mut fields = AttributeMap::new();
        if let Some(name) = &self.name {
            fields.insert("name".to_string(), serde_json::Value::String(name.clone()));
        }
        fields
    }

    fn rebuild(base: BaseModel, fields: &mut AttributeMap) -> ModelResult<Self> {
        let name = take_optional_string(fields, "name")?;
        Ok(Self { base, name })
    }
}

impl core::fmt::Display for Skills {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
