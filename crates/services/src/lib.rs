#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod confirm;
pub mod error;
pub mod history_service;
pub mod sessions;
pub mod ticker;

pub use exam_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use catalog_service::{CatalogPage, CatalogService};
pub use confirm::{Confirm, Prompt};
pub use error::{AppServicesError, ExamError, HistoryError};
pub use history_service::HistoryService;
pub use sessions::{
    ExamLoopService, ExamSession, SessionEnded, SessionObserver, SessionProgress, SessionState,
};
pub use ticker::SessionTicker;
