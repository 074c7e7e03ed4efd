use wasm_bindgen::JsValue;

use crate::{KeyValueStore, StoreError};

/// Browser `localStorage` of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Js(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
