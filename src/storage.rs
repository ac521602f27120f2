//! Persistent Storage
//!
//! Key/value storage backends and the JSON codec for the saved list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::TodoItem;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No window, or local storage disabled by the browser
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a read or write (e.g. quota exceeded)
    #[error("storage operation failed: {0}")]
    Operation(String),
    /// The saved value is not a valid serialized list
    #[error("corrupt saved data: {0}")]
    Corrupt(String),
    /// The list could not be serialized
    #[error("failed to serialize list: {0}")]
    Encode(String),
}

/// String key/value store, shaped after `window.localStorage`
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// `window.localStorage`.
///
/// Looks the storage object up on every call so the handle itself holds no
/// JS value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    /// True when local storage can be reached from this context
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}

/// In-memory storage. Clones share the same map, which lets a test keep a
/// handle while a controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Operation("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Either backend, picked at startup
#[derive(Debug, Clone)]
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    /// Local storage when reachable, otherwise an in-memory fallback
    pub fn detect() -> Self {
        if BrowserStorage::is_available() {
            AppStorage::Browser(BrowserStorage)
        } else {
            log::warn!("localStorage unavailable, changes will not survive a reload");
            AppStorage::Memory(MemoryStorage::new())
        }
    }
}

impl KeyValueStorage for AppStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            AppStorage::Browser(s) => s.get(key),
            AppStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            AppStorage::Browser(s) => s.set(key, value),
            AppStorage::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self {
            AppStorage::Browser(s) => s.remove(key),
            AppStorage::Memory(s) => s.remove(key),
        }
    }
}

// ========================
// Codec
// ========================

/// Serialize the whole list as a JSON array
pub fn encode(items: &[TodoItem]) -> StorageResult<String> {
    serde_json::to_string(items).map_err(|e| StorageError::Encode(e.to_string()))
}

pub fn decode(raw: &str) -> StorageResult<Vec<TodoItem>> {
    serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("todos", "[]").unwrap();
        assert_eq!(other.get("todos").unwrap(), Some("[]".to_string()));
        other.remove("todos").unwrap();
        assert_eq!(storage.get("todos").unwrap(), None);
    }

    #[test]
    fn test_decode_saved_list() {
        let raw = r#"[{"text":"Buy milk","completed":false},{"text":"Walk","completed":true}]"#;
        let items = decode(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text, "Walk");
        assert!(items[1].completed);
        assert_eq!(encode(&items).unwrap(), raw);
    }

    #[test]
    fn test_decode_corrupt() {
        assert!(matches!(decode("not json"), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode(r#"{"text":"x"}"#), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode(r#"[{"completed":true}]"#), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_decode_entry_without_completed() {
        let items = decode(r#"[{"text":"x"},{"text":"y","completed":true}]"#).unwrap();
        assert_eq!(items, vec![TodoItem::new("x"), TodoItem { text: "y".to_string(), completed: true }]);
    }
}
