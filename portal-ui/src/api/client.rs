//! HTTP API Client
//!
//! Browser fetches against the customer API. Responses are mapped onto the
//! same [`PortalError`] values the native client produces, so the view state
//! machines pick the same messages in both builds.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use subs_portal::{
    endpoints, CustomerKey, CustomerList, CustomerMetrics, CustomerRecord, PortalError,
    PortalResult, DEFAULT_API_BASE,
};

use crate::state::session::local_setting;

/// Local storage key for an API base override
const API_URL_KEY: &str = "subs_portal_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_setting(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

async fn get_json<T: DeserializeOwned>(url: &str) -> PortalResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| PortalError::Transport(e.to_string()))?;

    if response.status() == 404 {
        return Err(PortalError::NotFound);
    }

    if !response.ok() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        return Err(PortalError::Api { status, message });
    }

    response
        .json()
        .await
        .map_err(|e| PortalError::Decode(e.to_string()))
}

pub async fn find_customer_by_phone(phone: &str) -> PortalResult<CustomerRecord> {
    get_json(&endpoints::customer_by_phone(&get_api_base(), phone)).await
}

pub async fn get_metrics_for_customer(key: &CustomerKey) -> PortalResult<CustomerMetrics> {
    get_json(&endpoints::customer_metrics(&get_api_base(), key)).await
}

pub async fn get_customers() -> PortalResult<CustomerList> {
    get_json(&endpoints::customers(&get_api_base())).await
}
