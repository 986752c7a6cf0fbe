//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::{ExamId, QuestionError, QuestionId, SessionConfigError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by exam sessions and their orchestration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamError {
    #[error("question index {index} is out of range (0..{len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("{choice:?} is not a choice of question {question_id}")]
    InvalidChoice {
        question_id: QuestionId,
        choice: String,
    },
    #[error("question {0} is not part of this session")]
    UnknownQuestion(QuestionId),
    #[error("session already terminated")]
    Terminated,
    #[error("exam {0} is not in the catalog")]
    UnknownExam(ExamId),
    #[error("no questions available for session")]
    Empty,
    #[error(transparent)]
    Config(#[from] SessionConfigError),
}

/// Errors emitted by `HistoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] QuestionError),
}
