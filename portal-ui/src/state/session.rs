//! Browser Session
//!
//! Keeps the logged-in customer in `localStorage` under the shared session
//! key, so it survives reloads within the browser profile.

use subs_portal::{CustomerRecord, PortalError, PortalResult, SessionStore, SESSION_KEY};
use web_sys::Storage;

use super::console_warn;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a plain string setting from local storage
pub fn local_setting(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn storage() -> PortalResult<Storage> {
    local_storage().ok_or_else(|| PortalError::Session("local storage unavailable".to_string()))
}

/// [`SessionStore`] backed by the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalStorageSession {
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()> {
        let json = serde_json::to_string(customer)?;
        storage()?
            .set_item(SESSION_KEY, &json)
            .map_err(|_| PortalError::Session("could not write session".to_string()))
    }

    fn load(&self) -> PortalResult<Option<CustomerRecord>> {
        let raw = storage()?
            .get_item(SESSION_KEY)
            .map_err(|_| PortalError::Session("could not read session".to_string()))?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(customer) => Ok(Some(customer)),
            Err(e) => {
                console_warn(&format!("Ignoring unreadable session: {}", e));
                Ok(None)
            }
        }
    }

    fn clear(&self) -> PortalResult<()> {
        storage()?
            .remove_item(SESSION_KEY)
            .map_err(|_| PortalError::Session("could not clear session".to_string()))
    }
}
