//! Shopping List App
//!
//! Root component: hydrates the item store from local storage and lays out
//! header, input form and list.

use leptos::prelude::*;

use crate::components::{ItemList, ListHeader, NewItemForm};
use crate::config::AppConfig;
use crate::context::ShoppingContext;
use crate::ids::UuidIds;
use crate::item_store::ItemStore;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Load once on mount, every mutation writes back
    let core = ItemStore::hydrate(BrowserStorage, UuidIds, config.storage_key);
    ShoppingContext::new(core).provide();

    view! {
        <div class="page">
            <div class="card">
                <ListHeader />
                <NewItemForm />
                <ItemList />
            </div>
        </div>
    }
}
