//! `skillfolio-core` — entity foundation building blocks.
//!
//! Identity, timestamps, attribute-mapping (de)serialization and the storage
//! boundary every model is persisted through. Concrete models live in
//! `skillfolio-models`; storage backends live in `skillfolio-storage`.

pub mod base;
pub mod entity;
pub mod error;
pub mod id;
pub mod model;
pub mod persist;
pub mod timestamp;

pub use base::BaseModel;
pub use entity::Entity;
pub use error::{ModelError, ModelResult};
pub use id::ModelId;
pub use model::{AttributeMap, CLASS_KEY, Model, Record};
pub use persist::{Persistable, Storage, StorageError, StorageResult};
