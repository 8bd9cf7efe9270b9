//! Application Context
//!
//! Shared handle provided via Leptos Context API. Components call
//! `add`/`toggle`/`remove` here; each call mutates the item store (which
//! persists) and then publishes the new list to the reactive `AppStore`.
//! Nothing is published when the item store reports no change.

use leptos::prelude::*;
use log::debug;

use crate::ids::{IdGenerator, UuidIds};
use crate::item_store::ItemStore;
use crate::models::ItemStats;
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::{AppState, AppStateStoreFields, AppStore};

pub struct ShoppingContext<S = BrowserStorage, G = UuidIds>
where
    S: 'static,
    G: 'static,
{
    state: AppStore,
    core: StoredValue<ItemStore<S, G>, LocalStorage>,
}

impl<S: 'static, G: 'static> Clone for ShoppingContext<S, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static, G: 'static> Copy for ShoppingContext<S, G> {}

impl<S: KeyValueStorage + 'static, G: IdGenerator + 'static> ShoppingContext<S, G> {
    pub fn new(core: ItemStore<S, G>) -> Self {
        let state = AppStore::new(AppState::new(core.items().to_vec()));
        Self {
            state,
            core: StoredValue::new_local(core),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> AppStore {
        self.state
    }

    /// Counts from the item store, re-run when the published list changes
    pub fn stats(&self) -> ItemStats {
        self.state.items().track();
        self.core.with_value(|core| core.stats())
    }

    /// Returns true if an item was added
    pub fn add(&self, text: &str) -> bool {
        let added = self
            .core
            .try_update_value(|core| core.add(text).is_some())
            .unwrap_or(false);
        if added {
            self.publish();
        }
        added
    }

    /// Add the current draft; the draft is cleared only if an item was added
    pub fn submit_draft(&self) -> bool {
        let text = self.state.draft().get_untracked();
        let added = self.add(&text);
        if added {
            *self.state.draft().write() = String::new();
        }
        added
    }

    pub fn toggle(&self, id: &str) -> bool {
        let changed = self
            .core
            .try_update_value(|core| core.toggle(id))
            .unwrap_or(false);
        if changed {
            self.publish();
        }
        changed
    }

    pub fn remove(&self, id: &str) -> bool {
        let changed = self
            .core
            .try_update_value(|core| core.remove(id))
            .unwrap_or(false);
        if changed {
            self.publish();
        }
        changed
    }

    fn publish(&self) {
        let items = self.core.with_value(|core| core.items().to_vec());
        debug!("[CTX] Publishing {} items", items.len());
        *self.state.items().write() = items;
    }
}

impl ShoppingContext {
    /// Provide both this handle and its `AppStore` to child components
    pub fn provide(self) {
        provide_context(self);
        provide_context(self.state);
    }
}

/// Get the shopping context provided by `App`
pub fn use_shopping() -> ShoppingContext {
    expect_context::<ShoppingContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STORAGE_KEY;
    use crate::ids::SequentialIds;
    use crate::models::ShoppingItem;
    use crate::storage::MemoryStorage;

    type TestContext = ShoppingContext<MemoryStorage, SequentialIds>;

    fn setup(storage: MemoryStorage) -> TestContext {
        ShoppingContext::new(ItemStore::hydrate(storage, SequentialIds::new(), STORAGE_KEY))
    }

    fn published(ctx: &TestContext) -> Vec<ShoppingItem> {
        ctx.state().items().get_untracked()
    }

    fn published_texts(ctx: &TestContext) -> Vec<String> {
        published(ctx).into_iter().map(|item| item.text).collect()
    }

    #[test]
    fn test_hydrated_items_are_published() {
        Owner::new().with(|| {
            let ctx = setup(MemoryStorage::with_value(
                STORAGE_KEY,
                r#"[{"id":"a","text":"Bread","bought":true}]"#,
            ));
            assert_eq!(published_texts(&ctx), vec!["Bread"]);
            assert_eq!(ctx.stats(), ItemStats { total: 1, done: 1, left: 0 });
        });
    }

    #[test]
    fn test_add_publishes_new_list() {
        Owner::new().with(|| {
            let ctx = setup(MemoryStorage::new());

            assert!(ctx.add("Milk"));
            assert!(ctx.add("Eggs"));

            assert_eq!(published_texts(&ctx), vec!["Eggs", "Milk"]);
            assert_eq!(ctx.stats().total, 2);
        });
    }

    #[test]
    fn test_toggle_and_remove_publish() {
        Owner::new().with(|| {
            let ctx = setup(MemoryStorage::new());
            ctx.add("Milk");
            ctx.add("Eggs");
            let eggs = published(&ctx)[0].id.clone();

            assert!(ctx.toggle(&eggs));
            assert!(published(&ctx)[0].bought);
            assert_eq!(ctx.stats(), ItemStats { total: 2, done: 1, left: 1 });

            assert!(ctx.remove(&eggs));
            assert_eq!(published_texts(&ctx), vec!["Milk"]);
        });
    }

    #[test]
    fn test_noop_mutations_leave_snapshot_alone() {
        Owner::new().with(|| {
            let ctx = setup(MemoryStorage::new());
            ctx.add("Milk");
            let before = published(&ctx);

            assert!(!ctx.add("   "));
            assert!(!ctx.toggle("missing"));
            assert!(!ctx.remove("missing"));

            assert_eq!(published(&ctx), before);
        });
    }

    #[test]
    fn test_submit_draft_clears_only_on_success() {
        Owner::new().with(|| {
            let ctx = setup(MemoryStorage::new());

            *ctx.state().draft().write() = "  ".to_string();
            assert!(!ctx.submit_draft());
            assert_eq!(ctx.state().draft().get_untracked(), "  ");
            assert!(published(&ctx).is_empty());

            *ctx.state().draft().write() = " Milk ".to_string();
            assert!(ctx.submit_draft());
            assert_eq!(ctx.state().draft().get_untracked(), "");
            assert_eq!(published_texts(&ctx), vec!["Milk"]);
        });
    }
}
