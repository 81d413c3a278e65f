//! Customer picker view state machine
//!
//! Operator-facing variant of the dashboard: load every customer, pick one,
//! show that customer's cards.

use super::cards::{metric_cards, MetricCard};
use super::dashboard::METRICS_FAILED_MESSAGE;
use crate::api::PortalApi;
use crate::error::{PortalError, PortalResult};
use crate::models::{CustomerKey, CustomerList, CustomerMetrics, CustomerRecord};

pub const CUSTOMERS_FAILED_MESSAGE: &str = "Failed to load customers";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Idle,
    Loading,
    Loaded(CustomerMetrics),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct CustomerPicker {
    customers: Vec<CustomerRecord>,
    customers_loading: bool,
    customers_error: Option<String>,
    selected: Option<CustomerKey>,
    metrics: PickerState,
}

impl CustomerPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn is_loading_customers(&self) -> bool {
        self.customers_loading
    }

    pub fn selected(&self) -> Option<&CustomerKey> {
        self.selected.as_ref()
    }

    pub fn selected_customer(&self) -> Option<&CustomerRecord> {
        let key = self.selected.as_ref()?;
        self.customers.iter().find(|c| &c.customer_key == key)
    }

    pub fn metrics_state(&self) -> &PickerState {
        &self.metrics
    }

    pub fn is_loading_metrics(&self) -> bool {
        self.metrics == PickerState::Loading
    }

    /// The message to show, metrics failures first
    pub fn error_message(&self) -> Option<&str> {
        match &self.metrics {
            PickerState::Failed(message) => Some(message),
            _ => self.customers_error.as_deref(),
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        match &self.metrics {
            PickerState::Loaded(metrics) => metric_cards(metrics),
            _ => Vec::new(),
        }
    }

    pub fn begin_load_customers(&mut self) -> PortalResult<()> {
        if self.customers_loading {
            return Err(PortalError::Busy);
        }
        self.customers_loading = true;
        self.customers_error = None;
        Ok(())
    }

    pub fn finish_load_customers(&mut self, outcome: PortalResult<CustomerList>) {
        self.customers_loading = false;
        match outcome {
            Ok(list) => {
                tracing::debug!(count = list.results.len(), "Customers loaded");
                self.customers = list.results;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch customers");
                self.customers_error = Some(CUSTOMERS_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Select a customer and start loading their metrics
    pub fn select(&mut self, key: CustomerKey) -> PortalResult<CustomerKey> {
        if self.is_loading_metrics() {
            return Err(PortalError::Busy);
        }
        self.selected = Some(key.clone());
        self.metrics = PickerState::Loading;
        Ok(key)
    }

    /// Select by the key's text form, as rendered in a list or typed in.
    ///
    /// A loaded customer whose key prints as `value` is selected with its own
    /// key, so text keys such as `"007"` are kept as text. Anything else is
    /// parsed with [`CustomerKey::from`].
    pub fn select_by_value(&mut self, value: &str) -> PortalResult<CustomerKey> {
        let key = self
            .customers
            .iter()
            .find(|c| c.customer_key.to_string() == value)
            .map(|c| c.customer_key.clone())
            .unwrap_or_else(|| CustomerKey::from(value));
        self.select(key)
    }

    /// Apply a metrics response; stale responses for another customer are dropped
    pub fn finish_select(&mut self, key: &CustomerKey, outcome: PortalResult<CustomerMetrics>) {
        if self.selected.as_ref() != Some(key) || !self.is_loading_metrics() {
            tracing::debug!(customer_key = %key, "Dropping stale metrics response");
            return;
        }

        self.metrics = match outcome {
            Ok(metrics) => PickerState::Loaded(metrics),
            Err(e) => {
                tracing::warn!(customer_key = %key, error = %e, "Failed to fetch metrics");
                PickerState::Failed(METRICS_FAILED_MESSAGE.to_string())
            }
        };
    }

    pub async fn load_customers<A: PortalApi + ?Sized>(&mut self, api: &A) -> PortalResult<()> {
        self.begin_load_customers()?;
        let outcome = api.get_customers().await;
        self.finish_load_customers(outcome);
        Ok(())
    }

    pub async fn choose<A: PortalApi + ?Sized>(
        &mut self,
        api: &A,
        key: CustomerKey,
    ) -> PortalResult<()> {
        let key = self.select(key)?;
        let outcome = api.get_metrics_for_customer(&key).await;
        self.finish_select(&key, outcome);
        Ok(())
    }

    /// [`CustomerPicker::choose`] for a key given in its text form
    pub async fn choose_by_value<A: PortalApi + ?Sized>(
        &mut self,
        api: &A,
        value: &str,
    ) -> PortalResult<()> {
        let key = self.select_by_value(value)?;
        let outcome = api.get_metrics_for_customer(&key).await;
        self.finish_select(&key, outcome);
        Ok(())
    }
}
