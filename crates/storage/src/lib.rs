#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use liftlog_domain as domain;
use log::warn;

pub mod json_storage;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;

pub use json_storage::JsonStorage;
pub use local_storage::LocalStorage;
pub use memory::MemoryStore;

pub const KEY_TEMPLATES: &str = "workoutTemplates";
pub const KEY_HISTORY: &str = "workoutHistory";
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_LOG: &str = "log";

/// String store addressed by keys.
///
/// Implementations must not log, as they also back the log repository.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("{0}")]
    Js(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for domain::StorageError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable => domain::StorageError::Unavailable,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

impl From<StoreError> for domain::ReadError {
    fn from(value: StoreError) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<StoreError> for domain::CreateError {
    fn from(value: StoreError) -> Self {
        domain::CreateError::Storage(value.into())
    }
}

/// Reads the JSON array stored under `key`.
///
/// A missing key yields an empty list. So does a value which cannot be
/// decoded, after logging a warning.
pub fn load<T>(store: &impl KeyValueStore, key: &str) -> Result<Vec<T>, StoreError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let Some(json) = store.get_item(key)? else {
        return Ok(vec![]);
    };
    Ok(serde_json::from_str(&json).unwrap_or_else(|err| {
        warn!("discarding invalid data stored under {key:?}: {err}");
        vec![]
    }))
}

/// Replaces the value stored under `key` by `data` serialized as JSON.
pub fn save<T: serde::Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), StoreError> {
    store.set_item(key, &serde_json::to_string(data)?)
}
