//! End-to-end lifecycle tests.
//!
//! Tests: construct → save → storage → reload → delete
//!
//! Verifies:
//! - Persisted mappings rebuild into identical models
//! - The type-discriminator picks the concrete model on reload
//! - A storage handle shared through `Arc` sees every save/delete

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skillfolio_core::{BaseModel, CLASS_KEY, Entity, Model, Persistable, Record, Storage};
    use skillfolio_models::{AnyModel, Skills};

    use crate::InMemoryStorage;

    #[test]
    fn saved_models_reload_identically() -> anyhow::Result<()> {
        skillfolio_observability::init();
        let storage = InMemoryStorage::new();

        let mut rust = Skills::named("rust");
        let mut base = BaseModel::new();
        rust.save(&storage)?;
        base.save(&storage)?;

        let mut reloaded = storage.reload()?;
        reloaded.sort_by_key(|m| m.as_record().key());
        let mut expected = vec![AnyModel::from(rust), AnyModel::from(base)];
        expected.sort_by_key(|m| m.as_record().key());

        assert_eq!(reloaded, expected);
        Ok(())
    }

    #[test]
    fn persisted_mapping_is_the_export() -> anyhow::Result<()> {
        let storage = InMemoryStorage::new();
        let mut skills = Skills::named("rust");
        skills.save(&storage)?;

        let dict = storage
            .get(Skills::CLASS_NAME, *skills.id())?
            .ok_or_else(|| anyhow::anyhow!("saved record missing"))?;
        assert_eq!(dict.get(CLASS_KEY).and_then(|v| v.as_str()), Some("Skills"));

        let rebuilt = Skills::from_dict(dict)?;
        assert_eq!(rebuilt, skills);
        assert!(!rebuilt.attributes().contains_key(CLASS_KEY));
        Ok(())
    }

    #[test]
    fn re_saving_replaces_the_stored_copy() -> anyhow::Result<()> {
        let storage = InMemoryStorage::new();
        let mut skills = Skills::named("rust");
        skills.save(&storage)?;
        let first_updated_at = skills.updated_at();

        skills.set_name("go");
        skills.save(&storage)?;

        assert_eq!(storage.count(Some("Skills"))?, 1);
        let Some(AnyModel::Skills(stored)) = storage.get_model("Skills", *skills.id())? else {
            anyhow::bail!("expected a stored Skills");
        };
        assert_eq!(stored.name(), Some("go"));
        assert!(stored.updated_at() > first_updated_at);
        assert_eq!(stored.created_at(), skills.created_at());
        Ok(())
    }

    #[test]
    fn shared_handle_sees_saves_and_deletes() -> anyhow::Result<()> {
        let storage = Arc::new(InMemoryStorage::new());
        let handle: Arc<dyn Storage> = storage.clone();

        let mut skills = Skills::named("rust");
        skills.save(&handle)?;
        assert_eq!(storage.count(None)?, 1);

        skills.delete(&handle)?;
        assert_eq!(storage.count(None)?, 0);
        assert!(handle.all(None)?.is_empty());
        Ok(())
    }

    #[test]
    fn corrupted_record_surfaces_as_model_error() -> anyhow::Result<()> {
        let storage = InMemoryStorage::new();
        let mut skills = Skills::named("rust");
        skills.save(&storage)?;

        // Stage a copy whose timestamp cannot be parsed.
        struct Corrupted(String);
        impl Record for Corrupted {
            fn class_name(&self) -> &'static str {
                "Skills"
            }
            fn record_id(&self) -> skillfolio_core::ModelId {
                self.0.parse().unwrap_or_default()
            }
            fn to_dict(&self) -> skillfolio_core::AttributeMap {
                let mut dict = skillfolio_core::AttributeMap::new();
                dict.insert(CLASS_KEY.to_string(), "Skills".into());
                dict.insert("id".to_string(), self.0.clone().into());
                dict.insert("created_at".to_string(), "soon".into());
                dict.insert("updated_at".to_string(), "later".into());
                dict
            }
        }
        storage.new(&Corrupted(skills.id().to_string()))?;
        storage.save()?;

        let err = storage.reload().unwrap_err();
        assert!(err.to_string().starts_with("invalid timestamp"));
        Ok(())
    }
}
