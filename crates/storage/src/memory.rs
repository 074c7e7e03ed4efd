use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use crate::{KeyValueStore, StoreError};

/// In-memory store. Clones share their content.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(Arc<Mutex<BTreeMap<String, String>>>);

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.0.lock().map_err(|_| StoreError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.0.lock().map_err(|_| StoreError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
