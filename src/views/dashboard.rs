//! Dashboard view state machine
//!
//! Mounting reads the session: without a customer the view redirects to
//! login before any request is made; with one it is `Loading` and hands out
//! exactly one metrics fetch, which settles into `Loaded` or `Failed`.

use super::cards::{metric_cards, MetricCard};
use super::Route;
use crate::api::PortalApi;
use crate::error::PortalResult;
use crate::models::{CustomerKey, CustomerMetrics, CustomerRecord};
use crate::session::SessionStore;

pub const METRICS_FAILED_MESSAGE: &str = "Failed to load metrics";

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Loaded(CustomerMetrics),
    Failed(String),
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub struct DashboardFlow {
    customer: Option<CustomerRecord>,
    state: DashboardState,
    fetch_issued: bool,
}

impl DashboardFlow {
    /// Mount the dashboard against the current session
    pub fn mount<S: SessionStore + ?Sized>(session: &S) -> Self {
        let customer = match session.load() {
            Ok(customer) => customer,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session, sending to login");
                None
            }
        };

        match customer {
            Some(customer) => Self {
                customer: Some(customer),
                state: DashboardState::Loading,
                fetch_issued: false,
            },
            None => {
                tracing::debug!("No customer in session, redirecting to login");
                Self {
                    customer: None,
                    state: DashboardState::Redirect(Route::Login),
                    fetch_issued: false,
                }
            }
        }
    }

    pub fn customer(&self) -> Option<&CustomerRecord> {
        self.customer.as_ref()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == DashboardState::Loading
    }

    pub fn redirect(&self) -> Option<Route> {
        match self.state {
            DashboardState::Redirect(route) => Some(route),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            DashboardState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// "HEY Sam!"
    pub fn greeting(&self) -> Option<String> {
        self.customer
            .as_ref()
            .map(|customer| format!("HEY {}!", customer.first_name))
    }

    pub fn metrics(&self) -> Option<&CustomerMetrics> {
        match &self.state {
            DashboardState::Loaded(metrics) => Some(metrics),
            _ => None,
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        self.metrics().map(metric_cards).unwrap_or_default()
    }

    /// The key to fetch metrics for. Yields a key once per mount; later
    /// calls return `None`.
    pub fn pending_fetch(&mut self) -> Option<CustomerKey> {
        if self.fetch_issued || !self.is_loading() {
            return None;
        }
        let key = self.customer.as_ref()?.customer_key.clone();
        self.fetch_issued = true;
        Some(key)
    }

    /// Apply the metrics response; ignored unless the view is still loading
    pub fn finish(&mut self, outcome: PortalResult<CustomerMetrics>) {
        if !self.is_loading() {
            tracing::debug!("Dropping metrics response for a dashboard that is no longer loading");
            return;
        }

        self.state = match outcome {
            Ok(metrics) => DashboardState::Loaded(metrics),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch metrics");
                DashboardState::Failed(METRICS_FAILED_MESSAGE.to_string())
            }
        };
    }

    /// Clear the session and leave for the login route
    pub fn logout<S: SessionStore + ?Sized>(&mut self, session: &S) -> PortalResult<Route> {
        session.clear()?;
        if let Some(customer) = self.customer.take() {
            tracing::info!(customer_key = %customer.customer_key, "Customer logged out");
        }
        self.state = DashboardState::Redirect(Route::Login);
        Ok(Route::Login)
    }

    /// Mount and run the single metrics fetch to completion
    pub async fn load<A, S>(api: &A, session: &S) -> Self
    where
        A: PortalApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let mut flow = Self::mount(session);
        if let Some(key) = flow.pending_fetch() {
            let outcome = api.get_metrics_for_customer(&key).await;
            flow.finish(outcome);
        }
        flow
    }
}
