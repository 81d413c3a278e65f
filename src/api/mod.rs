//! Customer API
//!
//! The remote REST service that owns customer lookup and metric aggregation.
//!
//! # Endpoints
//!
//! - `GET {base}/data/get_customer_by_phone/?phone=<phone>` - Customer record or 404
//! - `GET {base}/data/get_customers/` - `{ "results": [...] }`
//! - `GET {base}/data/customer_metrics/?customer_key=<key>` - Metrics record
//!
//! [`PortalApi`] is the seam the view state machines drive. The native build
//! ships [`HttpPortalApi`]; the browser build talks to the same endpoints
//! through its own fetch wrapper using [`endpoints`].

#[cfg(feature = "native")]
mod client;

#[cfg(feature = "native")]
pub use client::{ApiConfig, HttpPortalApi};

use async_trait::async_trait;

use crate::error::PortalResult;
use crate::models::{CustomerKey, CustomerList, CustomerMetrics, CustomerRecord};

/// Default base URL of the customer API
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Operations the portal needs from the customer API
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Look a customer up by phone number
    ///
    /// Fails with [`crate::PortalError::NotFound`] when no customer has that phone.
    async fn find_customer_by_phone(&self, phone: &str) -> PortalResult<CustomerRecord>;

    /// Year-in-review metrics for one customer
    async fn get_metrics_for_customer(&self, key: &CustomerKey) -> PortalResult<CustomerMetrics>;

    /// Every customer, for the picker view
    async fn get_customers(&self) -> PortalResult<CustomerList>;
}

#[async_trait]
impl<T: PortalApi + ?Sized> PortalApi for std::sync::Arc<T> {
    async fn find_customer_by_phone(&self, phone: &str) -> PortalResult<CustomerRecord> {
        (**self).find_customer_by_phone(phone).await
    }

    async fn get_metrics_for_customer(&self, key: &CustomerKey) -> PortalResult<CustomerMetrics> {
        (**self).get_metrics_for_customer(key).await
    }

    async fn get_customers(&self) -> PortalResult<CustomerList> {
        (**self).get_customers().await
    }
}

/// URL builders shared by every client
pub mod endpoints {
    use crate::models::CustomerKey;

    fn base(api_base: &str) -> &str {
        api_base.trim_end_matches('/')
    }

    pub fn customer_by_phone(api_base: &str, phone: &str) -> String {
        format!(
            "{}/data/get_customer_by_phone/?phone={}",
            base(api_base),
            urlencoding::encode(phone)
        )
    }

    pub fn customers(api_base: &str) -> String {
        format!("{}/data/get_customers/", base(api_base))
    }

    pub fn customer_metrics(api_base: &str, key: &CustomerKey) -> String {
        format!(
            "{}/data/customer_metrics/?customer_key={}",
            base(api_base),
            urlencoding::encode(&key.to_string())
        )
    }
}
