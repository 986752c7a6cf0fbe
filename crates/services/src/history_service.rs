use exam_core::model::HistoryEntry;
use storage::ledger::HistoryLedger;

use crate::confirm::{Confirm, Prompt};
use crate::error::HistoryError;

/// Read and clear the persisted exam history.
#[derive(Clone)]
pub struct HistoryService {
    ledger: HistoryLedger,
}

impl HistoryService {
    #[must_use]
    pub fn new(ledger: HistoryLedger) -> Self {
        Self { ledger }
    }

    /// All recorded attempts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the ledger cannot be read.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.ledger.list().await?)
    }

    /// Clear the history after confirmation. Returns whether anything was cleared.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Storage` if the ledger cannot be written.
    pub async fn clear(&self, confirm: &dyn Confirm) -> Result<bool, HistoryError> {
        if !confirm.confirm(Prompt::ClearHistory) {
            return Ok(false);
        }
        self.ledger.clear().await?;
        log::info!("history cleared");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{HistoryEntryId, Outcome, Score};
    use std::sync::Arc;
    use storage::repository::InMemoryStore;

    async fn seeded() -> HistoryService {
        let ledger = HistoryLedger::new(Arc::new(InMemoryStore::new()));
        let score: Score = "5/5".parse().unwrap();
        ledger
            .append(HistoryEntry::new(
                HistoryEntryId::new(1),
                "Mock",
                "2023-11-14",
                score,
                10,
                Outcome::Finished,
            ))
            .await
            .unwrap();
        HistoryService::new(ledger)
    }

    #[tokio::test]
    async fn declined_clear_keeps_entries() {
        let history = seeded().await;
        assert!(!history.clear(&false).await.unwrap());
        assert_eq!(history.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_clear_empties_history() {
        let history = seeded().await;
        let asked = |prompt: Prompt| prompt == Prompt::ClearHistory;
        assert!(history.clear(&asked).await.unwrap());
        assert!(history.list().await.unwrap().is_empty());
    }
}
