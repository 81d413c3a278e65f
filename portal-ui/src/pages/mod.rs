//! Pages
//!
//! Top-level page components for each route.

pub mod customers;
pub mod dashboard;
pub mod login;

pub use customers::Customers;
pub use dashboard::Dashboard;
pub use login::Login;
