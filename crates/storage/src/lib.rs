#![forbid(unsafe_code)]

pub mod ledger;
pub mod repository;
pub mod sqlite;

pub use ledger::{HISTORY_KEY, HistoryLedger};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
