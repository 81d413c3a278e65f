//! View State Machines
//!
//! Framework-agnostic state for each screen of the portal. The CLI drives
//! them with the async helpers (`submit`, `load`, `choose`); the browser
//! build calls the `begin_*`/`finish` halves around its own fetches.

pub mod cards;
pub mod dashboard;
pub mod login;
pub mod picker;
pub mod route;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use cards::{metric_cards, MetricCard};
pub use dashboard::{DashboardFlow, DashboardState, METRICS_FAILED_MESSAGE};
pub use login::{LoginFlow, LoginState, LOGIN_FAILED_MESSAGE, NOT_FOUND_MESSAGE};
pub use picker::{CustomerPicker, PickerState, CUSTOMERS_FAILED_MESSAGE};
pub use route::Route;
pub use theme::{Background, Theme, ThemeName, DEFAULT_REVIEW_YEAR};
