//! Item List Component
//!
//! Renders every item as a row, or an empty state when there are none.

use leptos::prelude::*;

use crate::components::ShoppingItemRow;
use crate::context::use_shopping;
use crate::models::ShoppingItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// Current bought state of `id` in the published list
pub fn is_bought(items: &[ShoppingItem], id: &str) -> bool {
    items.iter().any(|item| item.id == id && item.bought)
}

/// Row key; ignores `bought` so a toggle keeps the row (and focus)
pub fn row_key(item: &ShoppingItem) -> String {
    item.id.clone()
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_shopping();
    let store = use_app_store();

    let on_toggle = Callback::new(move |id: String| {
        ctx.toggle(&id);
    });
    let on_remove = Callback::new(move |id: String| {
        ctx.remove(&id);
    });

    let has_items = move || store.items().with(|items| !items.is_empty());

    view! {
        <Show
            when=has_items
            fallback=|| view! {
                <div class="empty-state">
                    <div class="empty-title">"Tomt än så länge"</div>
                    <div class="empty-text">"Skriv något ovan och tryck Enter."</div>
                </div>
            }
        >
            <ul class="item-list" aria-label="Inköpslista">
                <For
                    each=move || store.items().get()
                    key=row_key
                    children=move |item| {
                        let id = item.id.clone();
                        let bought = Signal::derive(move || {
                            store.items().with(|items| is_bought(items, &id))
                        });
                        view! {
                            <ShoppingItemRow
                                item=item
                                bought=bought
                                on_toggle=on_toggle
                                on_remove=on_remove
                            />
                        }
                    }
                />
            </ul>
        </Show>
    }
}
