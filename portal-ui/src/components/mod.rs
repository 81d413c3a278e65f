//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod alert;
pub mod loading;
pub mod metric_card;

pub use alert::Alert;
pub use loading::{InlineLoading, Loading};
pub use metric_card::MetricGrid;
