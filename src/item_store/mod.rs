//! Item Store
//!
//! Owns the authoritative shopping list and keeps it in sync with a single
//! key-value slot. The list is read once when the store is hydrated and
//! written back in full after every mutation that changed something.
//!
//! Mutations report what they did (`Option<&ShoppingItem>` / `bool`) so the
//! caller can decide whether to re-render.

use std::collections::HashSet;

use log::{debug, error, info, warn};

use crate::ids::IdGenerator;
use crate::models::{ItemStats, ShoppingItem};
use crate::storage::{KeyValueStorage, StorageResult};


pub struct ItemStore<S, G> {
    storage: S,
    ids: G,
    key: String,
    items: Vec<ShoppingItem>,
}

impl<S: KeyValueStorage, G: IdGenerator> ItemStore<S, G> {
    /// Load the list saved under `key`.
    ///
    /// A missing slot, a failed read and a corrupt value all yield an empty
    /// list. Corrupt data stays in storage until the next write replaces it.
    pub fn hydrate(storage: S, ids: G, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = load_items(&storage, &key);
        info!("[STORE] Hydrated {} items from '{}'", items.len(), key);
        Self {
            storage,
            ids,
            key,
            items,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stats(&self) -> ItemStats {
        ItemStats::from_items(&self.items)
    }

    /// Add a new item at the top of the list.
    ///
    /// Returns `None` without touching storage when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<&ShoppingItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let item = ShoppingItem::new(self.ids.next_id(), text.to_string());
        debug!("[STORE] Adding '{}' as {}", item.text, item.id);
        self.items.insert(0, item);
        self.save();
        self.items.first()
    }

    /// Flip `bought` on the item with `id`. Returns false if there is none.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("[STORE] Toggle ignored, no item {}", id);
            return false;
        };
        item.bought = !item.bought;
        self.save();
        true
    }

    /// Delete the item with `id`. Returns false if there is none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("[STORE] Remove ignored, no item {}", id);
            return false;
        }
        self.save();
        true
    }

    /// Write the whole list back. Failures are logged, the in-memory list
    /// stays as it is.
    fn save(&self) {
        if let Err(e) = self.persist() {
            error!("[STORE] Failed to save list to '{}': {}", self.key, e);
        }
    }

    fn persist(&self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(&self.key, &json)
    }
}

fn load_items<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<ShoppingItem> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("[STORE] Could not read '{}': {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ShoppingItem>>(&raw) {
        Ok(items) => sanitize(items),
        Err(e) => {
            warn!("[STORE] Discarding corrupt list in '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Drop blank entries and repeated ids, keeping the first occurrence.
fn sanitize(items: Vec<ShoppingItem>) -> Vec<ShoppingItem> {
    let total = items.len();
    let mut seen = HashSet::new();
    let kept: Vec<ShoppingItem> = items
        .into_iter()
        .filter(|item| !item.text.trim().is_empty())
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    if kept.len() < total {
        warn!("[STORE] Dropped {} invalid saved items", total - kept.len());
    }
    kept
}
