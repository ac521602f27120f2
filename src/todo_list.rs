//! Todo List Model
//!
//! Ordered list of items, independent of the browser. The rendered list is
//! a projection of this model.

use crate::models::TodoItem;

/// Ordered collection of to-do items (display order = storage order)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Append a new item with trimmed `text`.
    ///
    /// Returns the index of the new item, or `None` if the text is blank.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.items.push(TodoItem::new(text));
        Some(self.items.len() - 1)
    }

    pub fn set_completed(&mut self, index: usize, completed: bool) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.completed = completed;
        Some(completed)
    }

    /// Replace the text of an item with the trimmed `draft`.
    ///
    /// A blank draft keeps the previous text. Returns the resulting text.
    pub fn rename(&mut self, index: usize, draft: &str) -> Option<&str> {
        let item = self.items.get_mut(index)?;
        let draft = draft.trim();
        if !draft.is_empty() {
            item.text = draft.to_string();
        }
        Some(item.text.as_str())
    }

    pub fn remove(&mut self, index: usize) -> Option<TodoItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
