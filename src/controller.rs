//! Todo Controller
//!
//! Command handlers over the list model. Every mutating command writes the
//! full list back to storage; the in-memory list stays authoritative when a
//! write fails.

use crate::models::TodoItem;
use crate::storage::{self, KeyValueStorage, StorageError, StorageResult};
use crate::todo_list::TodoList;

/// An in-progress edit of one item's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub index: usize,
    /// Text before the edit started
    pub original: String,
    /// Current contents of the edit field
    pub draft: String,
}

/// Owns the list, the storage backend and the active edit session
#[derive(Debug, Clone)]
pub struct TodoController<S: KeyValueStorage> {
    list: TodoList,
    storage: S,
    storage_key: String,
    editing: Option<EditSession>,
}

impl<S: KeyValueStorage> TodoController<S> {
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            list: TodoList::new(),
            storage,
            storage_key: storage_key.into(),
            editing: None,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Replace the list with the saved one.
    ///
    /// Missing, unreadable or corrupt data all load as an empty list.
    pub fn load(&mut self) -> usize {
        self.editing = None;
        let items = match self.read_saved() {
            Ok(items) => items,
            Err(StorageError::Corrupt(e)) => {
                log::warn!("ignoring corrupt saved list under '{}': {}", self.storage_key, e);
                Vec::new()
            }
            Err(e) => {
                log::warn!("could not read saved list: {}", e);
                Vec::new()
            }
        };
        self.list = TodoList::from_items(items);
        log::debug!("loaded {} items", self.list.len());
        self.list.len()
    }

    fn read_saved(&self) -> StorageResult<Vec<TodoItem>> {
        match self.storage.get(&self.storage_key)? {
            Some(raw) if !raw.is_empty() => storage::decode(&raw),
            _ => Ok(Vec::new()),
        }
    }

    /// Overwrite the saved value with the current list
    pub fn persist(&self) -> StorageResult<()> {
        let raw = storage::encode(self.list.items())?;
        self.storage.set(&self.storage_key, &raw)
    }

    /// Append an item; blank text is ignored and nothing is written
    pub fn add(&mut self, text: &str) -> StorageResult<Option<usize>> {
        let Some(index) = self.list.add(text) else {
            return Ok(None);
        };
        log::debug!("added item #{}", index);
        self.persist()?;
        Ok(Some(index))
    }

    /// Checkbox change: store the new completed flag
    pub fn set_completed(&mut self, index: usize, completed: bool) -> StorageResult<Option<bool>> {
        if self.list.set_completed(index, completed).is_none() {
            return Ok(None);
        }
        self.persist()?;
        Ok(Some(completed))
    }

    /// Start editing an item; any other open edit is dropped uncommitted
    pub fn begin_edit(&mut self, index: usize) -> Option<&EditSession> {
        let original = self.list.get(index)?.text.clone();
        self.editing = Some(EditSession {
            index,
            draft: original.clone(),
            original,
        });
        self.editing.as_ref()
    }

    pub fn update_draft(&mut self, draft: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = draft.into();
        }
    }

    /// Commit the open edit with its current draft.
    ///
    /// No-op if no edit is open, so a blur that follows a cancel does
    /// nothing. A blank draft keeps the original text.
    pub fn commit_edit(&mut self) -> StorageResult<Option<String>> {
        let Some(session) = self.editing.take() else {
            return Ok(None);
        };
        let Some(text) = self.list.rename(session.index, &session.draft) else {
            return Ok(None);
        };
        let text = text.to_string();
        log::debug!("edited #{}: '{}' -> '{}'", session.index, session.original, text);
        self.persist()?;
        Ok(Some(text))
    }

    /// Drop the open edit without saving
    pub fn cancel_edit(&mut self) -> Option<EditSession> {
        self.editing.take()
    }

    pub fn delete(&mut self, index: usize) -> StorageResult<Option<TodoItem>> {
        let Some(removed) = self.list.remove(index) else {
            return Ok(None);
        };
        // Positions after the removed item shift down by one
        self.editing = match self.editing.take() {
            Some(s) if s.index == index => None,
            Some(mut s) if s.index > index => {
                s.index -= 1;
                Some(s)
            }
            other => other,
        };
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empty the list and remove the saved value entirely
    pub fn clear_all(&mut self) -> StorageResult<()> {
        self.list.clear();
        self.editing = None;
        log::info!("cleared all items");
        self.storage.remove(&self.storage_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "todos";

    fn controller(storage: &MemoryStorage) -> TodoController<MemoryStorage> {
        let mut ctrl = TodoController::new(storage.clone(), KEY);
        ctrl.load();
        ctrl
    }

    /// Simulates a page reload against the same storage
    fn reload(storage: &MemoryStorage) -> Vec<TodoItem> {
        controller(storage).items().to_vec()
    }

    #[test]
    fn test_add_then_reload() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        assert_eq!(ctrl.add("Buy milk").unwrap(), Some(0));

        assert_eq!(reload(&storage), vec![TodoItem::new("Buy milk")]);
    }

    #[test]
    fn test_add_whitespace_is_ignored() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        assert_eq!(ctrl.add("   ").unwrap(), None);
        assert!(ctrl.items().is_empty());
        assert_eq!(storage.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("Walk").unwrap();
        assert_eq!(ctrl.set_completed(0, true).unwrap(), Some(true));
        assert!(reload(&storage)[0].completed);

        ctrl.set_completed(0, false).unwrap();
        assert!(!reload(&storage)[0].completed);
        assert_eq!(ctrl.set_completed(4, true).unwrap(), None);
    }

    #[test]
    fn test_edit_to_blank_keeps_text() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("A").unwrap();
        ctrl.begin_edit(0);
        ctrl.update_draft("");
        assert_eq!(ctrl.commit_edit().unwrap(), Some("A".to_string()));
        assert_eq!(reload(&storage)[0].text, "A");
    }

    #[test]
    fn test_edit_commit_trims() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("A").unwrap();
        let session = ctrl.begin_edit(0).cloned().unwrap();
        assert_eq!(session.draft, "A");
        ctrl.update_draft("  B  ");
        ctrl.commit_edit().unwrap();
        assert_eq!(reload(&storage)[0].text, "B");
        assert!(ctrl.editing().is_none());
    }

    #[test]
    fn test_cancel_discards_and_later_commit_is_noop() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("A").unwrap();
        ctrl.begin_edit(0);
        ctrl.update_draft("changed");
        assert!(ctrl.cancel_edit().is_some());
        // blur fired after the field is removed
        assert_eq!(ctrl.commit_edit().unwrap(), None);
        assert_eq!(ctrl.items()[0].text, "A");
        assert_eq!(reload(&storage)[0].text, "A");
    }

    #[test]
    fn test_delete_does_not_resurrect() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("a").unwrap();
        ctrl.add("b").unwrap();
        ctrl.delete(0).unwrap();

        assert_eq!(reload(&storage), vec![TodoItem::new("b")]);
    }

    #[test]
    fn test_delete_shifts_open_edit() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("a").unwrap();
        ctrl.add("b").unwrap();
        ctrl.begin_edit(1);
        ctrl.delete(0).unwrap();
        assert_eq!(ctrl.editing().map(|s| s.index), Some(0));
        ctrl.delete(0).unwrap();
        assert!(ctrl.editing().is_none());
    }

    #[test]
    fn test_clear_all_removes_key() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("a").unwrap();
        ctrl.add("b").unwrap();
        ctrl.clear_all().unwrap();

        assert!(ctrl.items().is_empty());
        assert_eq!(storage.get(KEY).unwrap(), None);
        assert!(reload(&storage).is_empty());
    }

    #[test]
    fn test_load_corrupt_data_is_empty() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{not json").unwrap();
        let ctrl = controller(&storage);
        assert!(ctrl.items().is_empty());
    }

    #[test]
    fn test_load_preserves_order_and_state() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"[{"text":"x","completed":true},{"text":"y","completed":false}]"#)
            .unwrap();
        let ctrl = controller(&storage);
        let texts: Vec<_> = ctrl.items().iter().map(|i| (i.text.as_str(), i.completed)).collect();
        assert_eq!(texts, vec![("x", true), ("y", false)]);
    }

    #[test]
    fn test_load_entry_without_completed() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"[{"text":"keep me"},{"text":"b","completed":true}]"#)
            .unwrap();
        let ctrl = controller(&storage);
        assert_eq!(ctrl.items().len(), 2);
        assert_eq!(ctrl.items()[0], TodoItem::new("keep me"));
        assert!(ctrl.items()[1].completed);
    }

    #[test]
    fn test_begin_edit_replaces_open_edit_uncommitted() {
        let storage = MemoryStorage::new();
        let mut ctrl = controller(&storage);
        ctrl.add("first").unwrap();
        ctrl.add("second").unwrap();
        ctrl.begin_edit(0);
        ctrl.update_draft("X");
        ctrl.begin_edit(1);
        assert_eq!(ctrl.editing().map(|s| s.index), Some(1));
        ctrl.update_draft("Y");
        assert_eq!(ctrl.commit_edit().unwrap(), Some("Y".to_string()));

        let texts: Vec<_> = reload(&storage).into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["first", "Y"]);
    }
}
