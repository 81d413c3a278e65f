//! App Root Component
//!
//! Routing and the portal context shared by every page.

use leptos::*;
use leptos_router::*;
use subs_portal::views::Route as PortalRoute;

use crate::pages::{Customers, Dashboard, Login};
use crate::state::provide_portal_context;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_portal_context();

    view! {
        <Router>
            <main class="portal">
                <Routes>
                    <Route path=PortalRoute::Login.path() view=Login />
                    <Route path=PortalRoute::Dashboard.path() view=Dashboard />
                    <Route path=PortalRoute::Customers.path() view=Customers />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Unknown paths land on the login form
#[component]
fn NotFound() -> impl IntoView {
    view! { <Redirect path=PortalRoute::Login.path() /> }
}
