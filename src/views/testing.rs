//! In-memory `PortalApi` for view tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::PortalApi;
use crate::error::{PortalError, PortalResult};
use crate::models::{CustomerKey, CustomerList, CustomerMetrics, CustomerRecord};

#[derive(Default)]
pub struct StubApi {
    customers: HashMap<String, CustomerRecord>,
    lookup_error: Option<PortalError>,
    metrics: Option<CustomerMetrics>,
    metrics_error: Option<PortalError>,
    list: Option<CustomerList>,
    list_error: Option<PortalError>,
    lookups: Mutex<Vec<String>>,
    metric_requests: Mutex<Vec<CustomerKey>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, phone: &str, customer: CustomerRecord) -> Self {
        self.customers.insert(phone.to_string(), customer);
        self
    }

    pub fn lookup_error(mut self, error: PortalError) -> Self {
        self.lookup_error = Some(error);
        self
    }

    pub fn metrics(mut self, metrics: CustomerMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics_error(mut self, error: PortalError) -> Self {
        self.metrics_error = Some(error);
        self
    }

    pub fn customer_list(mut self, list: CustomerList) -> Self {
        self.list = Some(list);
        self
    }

    pub fn list_error(mut self, error: PortalError) -> Self {
        self.list_error = Some(error);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn metric_requests(&self) -> Vec<CustomerKey> {
        self.metric_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortalApi for StubApi {
    async fn find_customer_by_phone(&self, phone: &str) -> PortalResult<CustomerRecord> {
        self.lookups.lock().unwrap().push(phone.to_string());
        if let Some(error) = &self.lookup_error {
            return Err(error.clone());
        }
        self.customers.get(phone).cloned().ok_or(PortalError::NotFound)
    }

    async fn get_metrics_for_customer(&self, key: &CustomerKey) -> PortalResult<CustomerMetrics> {
        self.metric_requests.lock().unwrap().push(key.clone());
        match &self.metrics_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.metrics.clone().unwrap_or_default()),
        }
    }

    async fn get_customers(&self) -> PortalResult<CustomerList> {
        match &self.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.list.clone().unwrap_or_default()),
        }
    }
}
