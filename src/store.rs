//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! rendered snapshot of the list; the authoritative copy lives in the
//! `ItemStore` behind `ShoppingContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ShoppingItem;

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items as last published by the item store, newest first
    pub items: Vec<ShoppingItem>,
    /// Text currently typed into the new item input
    pub draft: String,
}

impl AppState {
    pub fn new(items: Vec<ShoppingItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
