use std::fmt;
use std::sync::Arc;

use exam_core::model::{ExamId, HistoryEntry, SessionConfig};
use exam_core::Catalog;
use storage::ledger::HistoryLedger;
use storage::repository::StorageError;

use super::service::ExamSession;
use crate::confirm::Confirm;
use crate::error::ExamError;
use crate::Clock;

/// Notified once per session, after its history entry was handed to the ledger.
pub trait SessionObserver: Send + Sync {
    fn on_session_ended(&self, entry: &HistoryEntry);
}

impl<F> SessionObserver for F
where
    F: Fn(&HistoryEntry) + Send + Sync,
{
    fn on_session_ended(&self, entry: &HistoryEntry) {
        self(entry);
    }
}

/// Result of a terminal transition.
///
/// The session is over even when `persist_error` is set; the entry is still
/// available for display.
#[derive(Debug)]
pub struct SessionEnded {
    pub entry: HistoryEntry,
    pub persist_error: Option<StorageError>,
}

impl SessionEnded {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Orchestrates session start, history persistence and end-of-session notification.
#[derive(Clone)]
pub struct ExamLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    ledger: HistoryLedger,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl ExamLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, ledger: HistoryLedger) -> Self {
        Self {
            clock,
            catalog,
            ledger,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Start a session for a catalog exam.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Config` for an invalid title or duration,
    /// `ExamError::UnknownExam` if the exam is not listed, and
    /// `ExamError::Empty` if it has no questions.
    pub fn start_session(
        &self,
        title: &str,
        duration_minutes: u32,
        exam_id: ExamId,
    ) -> Result<ExamSession, ExamError> {
        let config = SessionConfig::new(title, duration_minutes, exam_id)?;
        let questions = self
            .catalog
            .questions_for(exam_id)
            .ok_or(ExamError::UnknownExam(exam_id))?
            .to_vec();

        let session = ExamSession::new(config, questions, self.clock)?;
        log::info!(
            "started session {title:?} for exam {exam_id}: {} questions, {duration_minutes} min",
            session.questions().len()
        );
        Ok(session)
    }

    /// Start a session using the listing's own title and duration.
    ///
    /// # Errors
    ///
    /// Same as [`ExamLoopService::start_session`].
    pub fn start_listing(&self, exam_id: ExamId) -> Result<ExamSession, ExamError> {
        let listing = self
            .catalog
            .listing(exam_id)
            .ok_or(ExamError::UnknownExam(exam_id))?;
        self.start_session(&listing.title, listing.duration_minutes, exam_id)
    }

    /// Hand a terminal entry to the ledger, then notify observers.
    ///
    /// Persistence is attempted once. A failure is logged and reported in the
    /// result but never blocks the notification.
    pub async fn complete(&self, entry: HistoryEntry) -> SessionEnded {
        let ended = match self.ledger.append(entry.clone()).await {
            Ok(stored) => SessionEnded {
                entry: stored,
                persist_error: None,
            },
            Err(err) => {
                log::error!("failed to persist history entry {}: {err}", entry.id);
                SessionEnded {
                    entry,
                    persist_error: Some(err),
                }
            }
        };

        for observer in &self.observers {
            observer.on_session_ended(&ended.entry);
        }
        ended
    }

    /// Finish `session` after confirmation and record the result.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Terminated` if the session already ended.
    pub async fn finish(
        &self,
        session: &mut ExamSession,
        confirm: &dyn Confirm,
    ) -> Result<Option<SessionEnded>, ExamError> {
        match session.finish(confirm)? {
            Some(entry) => Ok(Some(self.complete_session(session, entry).await)),
            None => Ok(None),
        }
    }

    /// Give up `session` after confirmation and record the result.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Terminated` if the session already ended.
    pub async fn give_up(
        &self,
        session: &mut ExamSession,
        confirm: &dyn Confirm,
    ) -> Result<Option<SessionEnded>, ExamError> {
        match session.give_up(confirm)? {
            Some(entry) => Ok(Some(self.complete_session(session, entry).await)),
            None => Ok(None),
        }
    }

    /// Apply one timer tick; records the result when time runs out.
    pub async fn tick(&self, session: &mut ExamSession) -> Option<SessionEnded> {
        let entry = session.tick()?;
        Some(self.complete_session(session, entry).await)
    }

    async fn complete_session(&self, session: &mut ExamSession, entry: HistoryEntry) -> SessionEnded {
        let ended = self.complete(entry).await;
        session.record_stored(&ended.entry);
        ended
    }
}

impl fmt::Debug for ExamLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamLoopService")
            .field("clock", &self.clock)
            .field("ledger_key", &self.ledger.key())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Prompt;
    use exam_core::model::QuestionId;
    use exam_core::time::fixed_clock;
    use std::sync::Mutex;
    use storage::repository::InMemoryStore;

    fn build_loop() -> (ExamLoopService, HistoryLedger) {
        let ledger = HistoryLedger::new(Arc::new(InMemoryStore::new()));
        let catalog = Arc::new(Catalog::builtin().unwrap());
        (
            ExamLoopService::new(fixed_clock(), catalog, ledger.clone()),
            ledger,
        )
    }

    #[test]
    fn start_session_validates_inputs() {
        let (svc, _) = build_loop();
        assert!(matches!(
            svc.start_session("Mock", 1, ExamId::new(404)),
            Err(ExamError::UnknownExam(_))
        ));
        assert!(matches!(
            svc.start_session("Mock", 0, ExamId::new(1)),
            Err(ExamError::Config(_))
        ));

        let session = svc.start_session("Mock", 1, ExamId::new(1)).unwrap();
        assert_eq!(session.questions().len(), 5);
        assert_eq!(session.remaining_secs(), 60);
    }

    #[test]
    fn start_listing_uses_catalog_title_and_duration() {
        let (svc, _) = build_loop();
        let session = svc.start_listing(ExamId::new(6)).unwrap();
        assert_eq!(session.config().title(), "Quick Math Drill");
        assert_eq!(session.remaining_secs(), 5 * 60);
    }

    #[tokio::test]
    async fn finish_persists_then_notifies() {
        let (svc, ledger) = build_loop();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let svc = svc.with_observer(Arc::new(move |entry: &HistoryEntry| {
            sink.lock().unwrap().push(entry.clone());
        }));

        let mut session = svc.start_session("Mock", 1, ExamId::new(1)).unwrap();
        session.select_answer(QuestionId::new(2), "Brasília").unwrap();
        let ended = svc
            .finish(&mut session, &|_: Prompt| true)
            .await
            .unwrap()
            .expect("confirmed");

        assert!(ended.is_persisted());
        assert_eq!(ended.entry.score, "1/5");
        assert_eq!(ledger.list().await.unwrap(), vec![ended.entry.clone()]);
        assert_eq!(seen.lock().unwrap().clone(), vec![ended.entry]);
    }

    #[tokio::test]
    async fn session_result_matches_stored_entry_after_id_collision() {
        let (svc, ledger) = build_loop();
        let mut first = svc.start_session("Mock", 1, ExamId::new(1)).unwrap();
        let mut second = svc.start_session("Mock", 1, ExamId::new(1)).unwrap();

        let a = svc.finish(&mut first, &true).await.unwrap().expect("confirmed");
        let b = svc.finish(&mut second, &true).await.unwrap().expect("confirmed");

        assert_eq!(a.entry.id.value(), 1_700_000_000_000);
        assert_eq!(b.entry.id.value(), 1_700_000_000_001);
        assert_eq!(second.result(), Some(&b.entry));
        assert_eq!(first.result(), Some(&a.entry));

        let stored: Vec<_> = ledger.list().await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(stored, vec![b.entry.id, a.entry.id]);
    }

    #[tokio::test]
    async fn declined_give_up_records_nothing() {
        let (svc, ledger) = build_loop();
        let mut session = svc.start_session("Mock", 1, ExamId::new(1)).unwrap();
        let ended = svc.give_up(&mut session, &false).await.unwrap();
        assert!(ended.is_none());
        assert!(session.is_active());
        assert!(ledger.list().await.unwrap().is_empty());
    }
}
