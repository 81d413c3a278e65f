//! # Subs Portal
//!
//! Customer portal for Sam's Subs loyalty members: log in with a phone
//! number, then browse a year-in-review dashboard of favorite sandwich,
//! favorite side, total inches ordered, most visited store and favorite
//! month.
//!
//! ## Modules
//!
//! - [`models`]: Customer and metrics records as served by the customer API
//! - [`api`]: The customer API seam and its HTTP client
//! - [`session`]: Where the logged-in customer is kept
//! - [`views`]: Login, dashboard and picker state machines, cards and theme
//! - [`month`]: Month name formatting
//! - [`config`]: TOML configuration with environment overrides
//!
//! The `native` feature (on by default) adds the reqwest client, the file
//! session store, configuration and the `subs-portal` CLI. Without it the
//! crate only carries the framework-agnostic core used by the browser build.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use subs_portal::api::{ApiConfig, HttpPortalApi};
//! use subs_portal::session::MemorySessionStore;
//! use subs_portal::views::{DashboardFlow, LoginFlow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpPortalApi::new(ApiConfig::default())?;
//!     let session = MemorySessionStore::new();
//!
//!     let mut login = LoginFlow::new();
//!     login.set_phone("5551234567");
//!     if login.submit(&api, &session).await?.is_some() {
//!         let dashboard = DashboardFlow::load(&api, &session).await;
//!         for card in dashboard.cards() {
//!             println!("{}: {}", card.title, card.value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod month;
pub mod session;
pub mod views;

#[cfg(feature = "native")]
pub mod config;

pub use error::{PortalError, PortalResult};

pub use models::{
    CustomerKey, CustomerList, CustomerMetrics, CustomerRecord, FavoriteMonth, FavoriteSandwich,
    FavoriteSide, SandwichInches, StoreVisits,
};

pub use api::{endpoints, PortalApi, DEFAULT_API_BASE};

#[cfg(feature = "native")]
pub use api::{ApiConfig, HttpPortalApi};

pub use session::{MemorySessionStore, SessionStore, SESSION_KEY};

#[cfg(feature = "native")]
pub use session::{FileSessionStore, SessionEnvelope};

pub use month::{month_name, month_name_from_number};

pub use views::{
    metric_cards, CustomerPicker, DashboardFlow, DashboardState, LoginFlow, LoginState,
    MetricCard, PickerState, Route, Theme, ThemeName,
};

#[cfg(feature = "native")]
pub use config::{
    generate_default_config, ApiConfig as ConfigApiConfig, Config, ConfigError, LoggingConfig,
    SessionConfig, ThemeConfig,
};
