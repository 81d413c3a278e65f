//! Metric Card Component
//!
//! Renders the five year-in-review cards.

use leptos::*;
use subs_portal::views::MetricCard as Card;

/// A single metric: title, value and optional subtitle
#[component]
pub fn MetricCard(
    card: Card,
    /// Theme-dependent card class
    #[prop(into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            <span class="metric-card__title">{card.title}</span>
            <div class="metric-card__value">{card.value}</div>
            {card.subtitle.map(|subtitle| view! {
                <p class="metric-card__subtitle">{subtitle}</p>
            })}
        </div>
    }
}

/// Cards laid out in display order
#[component]
pub fn MetricGrid(
    cards: Vec<Card>,
    card_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {cards
                .into_iter()
                .map(|card| view! { <MetricCard card=card class=card_class /> })
                .collect_view()}
        </div>
    }
}
