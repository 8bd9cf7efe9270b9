//! Shopping List Models
//!
//! Data structures persisted to local storage and rendered by the UI.

use serde::{Deserialize, Serialize};

/// A single entry on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Label as typed by the user (trimmed, never blank)
    pub text: String,
    /// Whether the item has been bought
    pub bought: bool,
}

impl ShoppingItem {
    /// Create a new, not yet bought item
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            bought: false,
        }
    }
}

/// Counts derived from the current list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub total: usize,
    pub done: usize,
    pub left: usize,
}

impl ItemStats {
    pub fn from_items(items: &[ShoppingItem]) -> Self {
        let total = items.len();
        let done = items.iter().filter(|item| item.bought).count();
        Self {
            total,
            done,
            left: total - done,
        }
    }

    /// Header subtitle for these counts
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "Lägg till första varan ✨".to_string()
        } else {
            format!("{} kvar • {} klara", self.left, self.done)
        }
    }
}
