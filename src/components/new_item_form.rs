//! New Item Form Component
//!
//! Text input plus submit button for adding items.

use leptos::prelude::*;

use crate::context::use_shopping;
use crate::store::{use_app_store, AppStateStoreFields};

/// Whether the draft would produce an item
pub fn can_add(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Form for adding a new item to the top of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_shopping();
    let store = use_app_store();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Lägg till vara…"
                aria-label="Lägg till vara"
                prop:value=move || store.draft().get()
                on:input=move |ev| { *store.draft().write() = event_target_value(&ev); }
            />
            <button
                type="submit"
                class="add-btn"
                disabled=move || !store.draft().with(|draft| can_add(draft))
            >
                "Lägg till"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_add() {
        assert!(can_add("Milk"));
        assert!(can_add("  Milk  "));
        assert!(!can_add(""));
        assert!(!can_add(" \t\n"));
    }
}
