//! Append-only history of finished and abandoned exam sessions.
//!
//! The whole ledger lives under one key as a JSON array in insertion order.
//! Every write is a read-modify-write of that array.

use std::sync::Arc;

use exam_core::model::{HistoryEntry, HistoryEntryId};
use tokio::sync::Mutex;

use crate::repository::{KeyValueStore, StorageError};

/// Well-known key holding the serialized history.
pub const HISTORY_KEY: &str = "exam_history";

#[derive(Clone)]
pub struct HistoryLedger {
    store: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append `entry` and return it as stored.
    ///
    /// If the id is already taken, the entry is stored under `max_id + 1`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the current list cannot be read or decoded,
    /// or if the updated list cannot be written.
    pub async fn append(&self, entry: HistoryEntry) -> Result<HistoryEntry, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_all().await?;
        let entry = if entries.iter().any(|e| e.id == entry.id) {
            let next = entries
                .iter()
                .map(|e| e.id.value())
                .max()
                .unwrap_or(0)
                .saturating_add(1);
            log::warn!(
                "history id {} already stored, using {next} instead",
                entry.id
            );
            entry.with_id(HistoryEntryId::new(next))
        } else {
            entry
        };

        entries.push(entry.clone());
        self.write_all(&entries).await?;
        Ok(entry)
    }

    /// All entries, most recently appended first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored list cannot be read or decoded.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        let mut entries = self.read_all().await?;
        entries.reverse();
        Ok(entries)
    }

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(&self.key).await
    }

    async fn read_all(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        match self.store.get(&self.key).await? {
            None => Ok(Vec::new()),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Serialization(e.to_string())),
        }
    }

    async fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), StorageError> {
        let bytes =
            serde_json::to_vec(entries).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.put(&self.key, &bytes).await
    }
}
