//! Customers Page
//!
//! Operator view: pick any customer from the list and show their cards.

use leptos::*;
use std::rc::Rc;
use subs_portal::views::{CustomerPicker, PickerState};

use crate::api;
use crate::components::{Alert, Loading, MetricGrid};
use crate::state::{console_error, mount_guard, use_portal};

#[component]
pub fn Customers() -> impl IntoView {
    let theme = use_portal().theme;
    let card_class = theme.card_class();
    let mounted = mount_guard();

    let picker = create_rw_signal(CustomerPicker::new());

    if let Some(Ok(())) = picker.try_update(CustomerPicker::begin_load_customers) {
        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let outcome = api::get_customers().await;
            if !mounted.get() {
                return;
            }
            if let Err(e) = &outcome {
                console_error(&format!("Failed to load customers: {}", e));
            }
            picker.try_update(|p| p.finish_load_customers(outcome));
        });
    }

    let on_select = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            return;
        }

        let Some(Ok(key)) = picker.try_update(|p| p.select_by_value(&value)) else {
            return;
        };

        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let outcome = api::get_metrics_for_customer(&key).await;
            if !mounted.get() {
                return;
            }
            if let Err(e) = &outcome {
                console_error(&format!("Failed to load metrics for {}: {}", key, e));
            }
            picker.try_update(|p| p.finish_select(&key, outcome));
        });
    };

    let options = move || {
        picker.with(|p| {
            p.customers()
                .iter()
                .map(|c| (c.customer_key.to_string(), c.display_name()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=theme.page_class() style=theme.css_variables()>
            <header class="dashboard-header">
                <h1 class="dashboard-header__headline">"Customer Metrics"</h1>
            </header>

            {move || {
                if picker.with(CustomerPicker::is_loading_customers) {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <select
                            class="customer-select"
                            on:change=on_select.clone()
                            disabled=move || picker.with(CustomerPicker::is_loading_metrics)
                        >
                            <option value="">"Select a customer"</option>
                            {options()
                                .into_iter()
                                .map(|(key, name)| view! { <option value=key>{name}</option> })
                                .collect_view()}
                        </select>
                    }
                    .into_view()
                }
            }}

            {move || {
                picker.with(|p| p.selected_customer().map(|c| c.display_name()))
                    .map(|name| view! { <h2 class="dashboard-header__greeting">{name}</h2> })
            }}

            {move || match picker.with(|p| p.metrics_state().clone()) {
                PickerState::Loading => view! { <Loading /> }.into_view(),
                PickerState::Loaded(_) => {
                    let cards = picker.with(CustomerPicker::cards);
                    view! { <MetricGrid cards=cards card_class=card_class /> }.into_view()
                }
                _ => ().into_view(),
            }}

            {move || {
                picker.with(|p| p.error_message().map(str::to_string))
                    .map(|message| view! { <Alert message=message /> })
            }}
        </div>
    }
}
