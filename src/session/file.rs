//! File-backed session store for the kiosk CLI.
//!
//! The record lives in a single JSON file next to the storage key it would
//! have in a browser. Writes go through a temporary file and a rename so a
//! reader never sees a half-written session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{SessionStore, SESSION_KEY};
use crate::error::PortalResult;
use crate::models::CustomerRecord;

/// On-disk layout of a saved session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub key: String,
    pub saved_at: DateTime<Utc>,
    pub customer: CustomerRecord,
}

/// Session store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full saved envelope, including when it was written
    pub fn envelope(&self) -> PortalResult<Option<SessionEnvelope>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<SessionEnvelope>(&content) {
            Ok(envelope) if envelope.key == SESSION_KEY => Ok(Some(envelope)),
            Ok(envelope) => {
                tracing::warn!(path = ?self.path, key = %envelope.key, "Ignoring session with unexpected key");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, customer: &CustomerRecord) -> PortalResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let envelope = SessionEnvelope {
            key: SESSION_KEY.to_string(),
            saved_at: Utc::now(),
            customer: customer.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = ?self.path, customer_key = %customer.customer_key, "Session saved");
        Ok(())
    }

    fn load(&self) -> PortalResult<Option<CustomerRecord>> {
        Ok(self.envelope()?.map(|envelope| envelope.customer))
    }

    fn clear(&self) -> PortalResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = ?self.path, "Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        let customer = CustomerRecord::new(42, "Sam").last_name("Smith");
        store.save(&customer).unwrap();

        assert_eq!(store.load().unwrap(), Some(customer.clone()));
        let envelope = store.envelope().unwrap().unwrap();
        assert_eq!(envelope.key, SESSION_KEY);
        assert!(!dir.path().join("nested").join("session.json.tmp").exists());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_second_save_replaces_first() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.save(&CustomerRecord::new(1, "Ana")).unwrap();
        store.save(&CustomerRecord::new(2, "Ben")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.customer_key.to_string(), "2");
    }
}
