//! List Header Component

use leptos::prelude::*;

use crate::context::use_shopping;

/// Title and remaining/done summary
#[component]
pub fn ListHeader() -> impl IntoView {
    let ctx = use_shopping();

    view! {
        <header class="list-header">
            <h1>"🛒 Min inköpslista"</h1>
            <p class="subtitle">{move || ctx.stats().summary()}</p>
        </header>
    }
}
