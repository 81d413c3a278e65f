//! Alert Component
//!
//! Inline error message shown inside a page.

use leptos::*;

#[component]
pub fn Alert(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <span class="alert__icon">"✕"</span>
            <span class="alert__message">{message}</span>
        </div>
    }
}
