use std::sync::Arc;

use dioxus::prelude::*;
use services::{CatalogService, ExamLoopService, HistoryService};

use crate::vm::ResultBannerVm;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn exam_loop(&self) -> Arc<ExamLoopService>;
    fn history(&self) -> Arc<HistoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    exam_loop: Arc<ExamLoopService>,
    history: Arc<HistoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            exam_loop: app.exam_loop(),
            history: app.history(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Result of the last ended session, shown once on the catalog page.
#[derive(Clone, Copy)]
pub struct LastResult(pub Signal<Option<ResultBannerVm>>);

impl LastResult {
    /// Provide a fresh slot in the current scope.
    pub fn provide() -> Self {
        use_context_provider(|| LastResult(Signal::new(None)))
    }

    #[must_use]
    pub fn get(self) -> Option<ResultBannerVm> {
        self.0.read().clone()
    }

    pub fn clear(mut self) {
        self.0.set(None);
    }

    pub fn set(mut self, banner: ResultBannerVm) {
        self.0.set(Some(banner));
    }
}
