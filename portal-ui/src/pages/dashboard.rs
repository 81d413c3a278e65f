//! Dashboard Page
//!
//! Year-in-review for the customer in the session. Mounting with no customer
//! sends the browser back to login without touching the network.

use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;
use subs_portal::views::{DashboardFlow, DashboardState};

use crate::api;
use crate::components::{Alert, Loading, MetricGrid};
use crate::state::{console_error, mount_guard, use_portal};

#[component]
pub fn Dashboard() -> impl IntoView {
    let portal = use_portal();
    let session = portal.session;
    let theme = portal.theme;
    let card_class = theme.card_class();
    let navigate = use_navigate();
    let mounted = mount_guard();

    let flow = create_rw_signal(DashboardFlow::mount(&session));

    // One metrics request per mount
    if let Some(key) = flow.try_update(DashboardFlow::pending_fetch).flatten() {
        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let outcome = api::get_metrics_for_customer(&key).await;
            if !mounted.get() {
                return;
            }
            if let Err(e) = &outcome {
                console_error(&format!("Failed to load metrics for {}: {}", key, e));
            }
            flow.try_update(|f| f.finish(outcome));
        });
    }

    // Covers both the missing session on mount and logout
    create_effect(move |_| {
        if let Some(route) = flow.with(DashboardFlow::redirect) {
            navigate(route.path(), Default::default());
        }
    });

    let on_logout = move |_| {
        if let Some(Err(e)) = flow.try_update(|f| f.logout(&session)) {
            console_error(&format!("Logout failed: {}", e));
        }
    };

    view! {
        <div class=theme.page_class() style=theme.css_variables()>
            <header class="dashboard-header">
                <div>
                    <h2 class="dashboard-header__greeting">
                        {move || flow.with(DashboardFlow::greeting).unwrap_or_default()}
                    </h2>
                    <h1 class="dashboard-header__headline">{theme.headline()}</h1>
                    <p class="dashboard-header__tagline">{theme.tagline()}</p>
                </div>
                <button class="button button--outline" on:click=on_logout>"Logout"</button>
            </header>

            {move || match flow.with(|f| f.state().clone()) {
                DashboardState::Loading => view! { <Loading /> }.into_view(),
                DashboardState::Failed(message) => view! { <Alert message=message /> }.into_view(),
                DashboardState::Loaded(_) => {
                    let cards = flow.with(DashboardFlow::cards);
                    view! { <MetricGrid cards=cards card_class=card_class /> }.into_view()
                }
                DashboardState::Redirect(_) => ().into_view(),
            }}
        </div>
    }
}
