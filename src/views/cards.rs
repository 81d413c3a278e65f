//! Metric cards
//!
//! Turns a metrics record into the five cards every dashboard shows.

use serde::Serialize;

use crate::models::CustomerMetrics;
use crate::month::{month_name, NOT_AVAILABLE};

/// One rendered metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
}

impl MetricCard {
    fn new(title: &'static str, value: String, subtitle: Option<String>) -> Self {
        Self {
            title,
            value,
            subtitle,
        }
    }
}

fn text_or_na(value: Option<&str>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// The five dashboard cards, in display order
pub fn metric_cards(metrics: &CustomerMetrics) -> Vec<MetricCard> {
    let sandwich = metrics.favorite_sandwich.as_ref();
    let side = metrics.favorite_side.as_ref();
    let store = metrics.most_visited_store.as_ref();
    let month = metrics.favorite_month.as_ref();

    let inches = metrics
        .total_inches
        .as_ref()
        .and_then(|t| t.inches)
        .unwrap_or(0.0);

    vec![
        MetricCard::new(
            "Favorite Sandwich",
            text_or_na(sandwich.and_then(|s| s.name.as_deref())),
            Some(format!(
                "Ordered {} times",
                sandwich.and_then(|s| s.count).unwrap_or(0)
            )),
        ),
        MetricCard::new(
            "Favorite Side",
            text_or_na(side.and_then(|s| s.name.as_deref())),
            Some(format!(
                "Ordered {} times",
                side.and_then(|s| s.count).unwrap_or(0)
            )),
        ),
        MetricCard::new(
            "Total Inches of Sandwich",
            format!("{} inches", inches),
            None,
        ),
        MetricCard::new(
            "Most Visited Store",
            text_or_na(store.and_then(|s| s.city.as_deref())),
            Some(format!(
                "Your go-to spot with {} visits",
                store.and_then(|s| s.visits).unwrap_or(0)
            )),
        ),
        MetricCard::new(
            "Favorite Month",
            month
                .and_then(|m| m.month.as_ref())
                .map(month_name)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            Some(format!(
                "You visited {} times",
                month.and_then(|m| m.visits).unwrap_or(0)
            )),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_metrics() -> CustomerMetrics {
        serde_json::from_value(json!({
            "favorite_sandwich": {"SANDWICH": "Turkey Club", "SANDWICH_COUNT": 14},
            "favorite_side": {"SIDE": "Chips", "SIDE_COUNT": 9},
            "total_inches": {"INCHES_OF_SANDWICH": 168},
            "most_visited_store": {"CITY": "Logan", "MOST_VISITED_COUNT": 11},
            "favorite_month": {"MONTH": 3, "NUMOFVISITS": 5}
        }))
        .unwrap()
    }

    #[test]
    fn test_full_metrics() {
        let cards = metric_cards(&sample_metrics());
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Favorite Sandwich",
                "Favorite Side",
                "Total Inches of Sandwich",
                "Most Visited Store",
                "Favorite Month"
            ]
        );

        assert_eq!(cards[0].value, "Turkey Club");
        assert_eq!(cards[0].subtitle.as_deref(), Some("Ordered 14 times"));
        assert_eq!(cards[1].value, "Chips");
        assert_eq!(cards[2].value, "168 inches");
        assert_eq!(cards[2].subtitle, None);
        assert_eq!(cards[3].value, "Logan");
        assert_eq!(
            cards[3].subtitle.as_deref(),
            Some("Your go-to spot with 11 visits")
        );
        assert_eq!(cards[4].value, "March");
        assert_eq!(cards[4].subtitle.as_deref(), Some("You visited 5 times"));
    }

    #[test]
    fn test_empty_metrics_fall_back() {
        let cards = metric_cards(&CustomerMetrics::default());
        assert_eq!(cards[0].value, "N/A");
        assert_eq!(cards[0].subtitle.as_deref(), Some("Ordered 0 times"));
        assert_eq!(cards[1].value, "N/A");
        assert_eq!(cards[2].value, "0 inches");
        assert_eq!(cards[3].value, "N/A");
        assert_eq!(cards[4].value, "N/A");
        assert_eq!(cards[4].subtitle.as_deref(), Some("You visited 0 times"));
    }

    #[test]
    fn test_fractional_inches_and_bad_month() {
        let metrics: CustomerMetrics = serde_json::from_value(json!({
            "total_inches": {"INCHES_OF_SANDWICH": "42.5"},
            "favorite_month": {"MONTH": "abc"},
            "favorite_sandwich": {"SANDWICH": ""}
        }))
        .unwrap();

        let cards = metric_cards(&metrics);
        assert_eq!(cards[0].value, "N/A");
        assert_eq!(cards[2].value, "42.5 inches");
        assert_eq!(cards[4].value, "N/A");

        let metrics: CustomerMetrics = serde_json::from_value(json!({
            "total_inches": {"INCHES_OF_SANDWICH": 42.25}
        }))
        .unwrap();
        assert_eq!(metric_cards(&metrics)[2].value, "42.25 inches");
    }
}
