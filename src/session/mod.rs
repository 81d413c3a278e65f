//! Session Store
//!
//! Holds the logged-in customer record across navigation. The views receive
//! a store explicitly instead of reaching for shared global storage, so any
//! backend (memory, a file, browser local storage) can sit behind them.

mod memory;

#[cfg(feature = "native")]
mod file;

pub use memory::MemorySessionStore;

#[cfg(feature = "native")]
pub use file::{FileSessionStore, SessionEnvelope};

use crate::error::PortalResult;
use crate::models::CustomerRecord;

/// Storage key under which the serialized customer record is kept
pub const SESSION_KEY: &str = "customerData";

/// Persistence for the logged-in customer
///
/// There is at most one record; `save` replaces it wholesale.
pub trait SessionStore {
    /// Persist the record, overwriting any previous one
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()>;

    /// The stored record, or `None` if never set or cleared
    fn load(&self) -> PortalResult<Option<CustomerRecord>>;

    /// Forget the stored record
    fn clear(&self) -> PortalResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()> {
        (**self).save(customer)
    }

    fn load(&self) -> PortalResult<Option<CustomerRecord>> {
        (**self).load()
    }

    fn clear(&self) -> PortalResult<()> {
        (**self).clear()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()> {
        (**self).save(customer)
    }

    fn load(&self) -> PortalResult<Option<CustomerRecord>> {
        (**self).load()
    }

    fn clear(&self) -> PortalResult<()> {
        (**self).clear()
    }
}
