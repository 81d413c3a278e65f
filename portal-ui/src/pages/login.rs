//! Login Page
//!
//! Phone number form. A successful lookup stores the customer and moves on to
//! the dashboard; failures stay on the form with a message.

use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;
use subs_portal::views::LoginFlow;

use crate::api;
use crate::components::{Alert, InlineLoading};
use crate::state::{console_error, mount_guard, use_portal};

#[component]
pub fn Login() -> impl IntoView {
    let portal = use_portal();
    let session = portal.session;
    let theme = portal.theme;
    let navigate = use_navigate();
    let mounted = mount_guard();

    let flow = create_rw_signal(LoginFlow::new());
    let submitting = move || flow.with(LoginFlow::is_submitting);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // A second submit while one is pending is ignored
        let Some(Ok(phone)) = flow.try_update(LoginFlow::begin_submit) else {
            return;
        };

        let navigate = navigate.clone();
        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let outcome = api::find_customer_by_phone(&phone).await;
            if !mounted.get() {
                return;
            }
            if let Err(e) = &outcome {
                if !e.is_not_found() {
                    console_error(&format!("Customer lookup failed: {}", e));
                }
            }

            let route = flow.try_update(|f| f.finish(outcome, &session)).flatten();
            if let Some(route) = route {
                navigate(route.path(), Default::default());
            }
        });
    };

    view! {
        <div class=theme.page_class() style=theme.css_variables()>
            <div class="login-card">
                <h1 class="login-card__title">{theme.portal_title()}</h1>

                <form on:submit=on_submit class="login-form">
                    <label for="phone">"Phone Number"</label>
                    <input
                        id="phone"
                        type="tel"
                        autocomplete="tel"
                        prop:value=move || flow.with(|f| f.phone().to_string())
                        on:input=move |ev| flow.update(|f| f.set_phone(event_target_value(&ev)))
                        disabled=submitting
                    />

                    {move || {
                        flow.with(|f| f.error_message().map(str::to_string))
                            .map(|message| view! { <Alert message=message /> })
                    }}

                    <button type="submit" class="button button--primary" disabled=submitting>
                        {move || {
                            if submitting() {
                                view! { <InlineLoading /> }.into_view()
                            } else {
                                "Login".into_view()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
