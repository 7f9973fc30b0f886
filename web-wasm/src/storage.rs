//! `window.localStorage` as a report store backend

use communityfix_common::store::{ReportStore, StorageBackend, StorageError};
use wasm_bindgen::JsValue;

/// Key-value backend over browser-local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError("localStorage is unavailable".to_string()))
}

fn js_error(err: JsValue) -> StorageError {
    StorageError(format!("{err:?}"))
}

/// Report store bound to this browser profile.
pub fn report_store() -> ReportStore<LocalStorageBackend> {
    ReportStore::new(LocalStorageBackend)
}
