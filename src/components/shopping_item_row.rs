//! Shopping Item Row Component
//!
//! One list entry with a toggle control and a remove control. Holds no
//! state of its own; both actions are handed back to the caller by id.

use leptos::prelude::*;

use crate::models::ShoppingItem;

/// Accessible label describing what the toggle will do
pub fn toggle_label(bought: bool) -> &'static str {
    if bought {
        "Markera som ej köpt"
    } else {
        "Markera som köpt"
    }
}

pub fn remove_label(text: &str) -> String {
    format!("Ta bort {}", text)
}

pub fn row_class(bought: bool) -> &'static str {
    if bought {
        "item-row bought"
    } else {
        "item-row"
    }
}

pub fn status_icon(bought: bool) -> &'static str {
    if bought {
        "✓"
    } else {
        "○"
    }
}

/// A single shopping list row
///
/// `bought` is the live state; `item.bought` is not read so the row can stay
/// mounted across toggles.
#[component]
pub fn ShoppingItemRow(
    item: ShoppingItem,
    #[prop(into)] bought: Signal<bool>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let ShoppingItem { id, text, .. } = item;
    let toggle_id = id.clone();
    let text_toggle_id = id.clone();

    view! {
        <li class=move || row_class(bought.get())>
            // Status toggle
            <button
                type="button"
                class="status-btn"
                aria-pressed=move || if bought.get() { "true" } else { "false" }
                aria-label=move || toggle_label(bought.get())
                on:click=move |_| on_toggle.run(toggle_id.clone())
            >
                {move || status_icon(bought.get())}
            </button>

            // Text (also toggles)
            <span
                class="item-text"
                title=text.clone()
                on:click=move |_| on_toggle.run(text_toggle_id.clone())
            >
                {text.clone()}
            </span>

            <button
                type="button"
                class="remove-btn"
                aria-label=remove_label(&text)
                on:click=move |_| on_remove.run(id.clone())
            >
                "✕"
            </button>
        </li>
    }
}
