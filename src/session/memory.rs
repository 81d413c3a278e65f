//! In-process session store.

use std::sync::RwLock;

use super::SessionStore;
use crate::error::{PortalError, PortalResult};
use crate::models::CustomerRecord;

/// Session store that keeps the record in memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    customer: RwLock<Option<CustomerRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a logged-in customer
    pub fn with_customer(customer: CustomerRecord) -> Self {
        Self {
            customer: RwLock::new(Some(customer)),
        }
    }
}

fn poisoned<T>(_: T) -> PortalError {
    PortalError::Session("session lock poisoned".to_string())
}

impl SessionStore for MemorySessionStore {
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()> {
        *self.customer.write().map_err(poisoned)? = Some(customer.clone());
        Ok(())
    }

    fn load(&self) -> PortalResult<Option<CustomerRecord>> {
        Ok(self.customer.read().map_err(poisoned)?.clone())
    }

    fn clear(&self) -> PortalResult<()> {
        self.customer.write().map_err(poisoned)?.take();
        Ok(())
    }
}
