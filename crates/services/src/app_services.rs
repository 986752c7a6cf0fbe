use std::sync::Arc;

use exam_core::Catalog;
use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::history_service::HistoryService;
use crate::sessions::{ExamLoopService, SessionObserver};
use crate::Clock;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    exam_loop: Arc<ExamLoopService>,
    history: Arc<HistoryService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in catalog is invalid.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, None)
    }

    /// Build services over a throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in catalog is invalid.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock, None)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in catalog is invalid.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        observer: Option<Arc<dyn SessionObserver>>,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);

        let mut exam_loop =
            ExamLoopService::new(clock, Arc::clone(&catalog), storage.history.clone());
        if let Some(observer) = observer {
            exam_loop = exam_loop.with_observer(observer);
        }

        Ok(Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            exam_loop: Arc::new(exam_loop),
            history: Arc::new(HistoryService::new(storage.history.clone())),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn exam_loop(&self) -> Arc<ExamLoopService> {
        Arc::clone(&self.exam_loop)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::ExamId;
    use exam_core::time::fixed_clock;

    #[tokio::test]
    async fn services_share_one_ledger() {
        let app = AppServices::in_memory(fixed_clock()).unwrap();
        let mut session = app.exam_loop().start_listing(ExamId::new(3)).unwrap();
        app.exam_loop()
            .give_up(&mut session, &true)
            .await
            .unwrap()
            .expect("confirmed");

        let entries = app.history().list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "FUVEST 2024 - First Phase");
    }
}
