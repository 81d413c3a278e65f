//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
        </div>
    }
}

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="loading-spinner loading-spinner--inline" />
    }
}
