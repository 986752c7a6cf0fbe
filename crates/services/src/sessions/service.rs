use std::fmt;

use exam_core::model::{
    AnswerError, AnswerSheet, HistoryEntry, HistoryEntryId, Outcome, Question, QuestionId, Score,
    SessionConfig,
};
use exam_core::{Clock, Countdown, Tick};

use super::progress::SessionProgress;
use crate::confirm::{Confirm, Prompt};
use crate::error::ExamError;

/// Lifecycle of an exam session. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminated(Outcome),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed attempt at a fixed question set.
///
/// Holds the current-question pointer, the answer sheet and the countdown.
/// Every terminal transition (finish, give up, time up) cancels the countdown
/// first, then scores and builds the history entry. Once terminated, every
/// mutating call is rejected with `ExamError::Terminated` and changes nothing.
pub struct ExamSession {
    config: SessionConfig,
    questions: Vec<Question>,
    answers: AnswerSheet,
    current: usize,
    countdown: Countdown,
    state: SessionState,
    clock: Clock,
    result: Option<HistoryEntry>,
}

impl ExamSession {
    /// Start a session over `questions`; the countdown begins immediately.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Empty` if no questions are provided.
    pub fn new(
        config: SessionConfig,
        questions: Vec<Question>,
        clock: Clock,
    ) -> Result<Self, ExamError> {
        if questions.is_empty() {
            return Err(ExamError::Empty);
        }

        let countdown = Countdown::start(config.total_secs());
        Ok(Self {
            config,
            questions,
            answers: AnswerSheet::new(),
            current: 0,
            countdown,
            state: SessionState::Active,
            clock,
            result: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// The selected choice for `question_id`, or `None` while unanswered.
    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    /// The history entry built at termination, if terminated.
    ///
    /// This is the entry as handed to the ledger. When the session is ended
    /// through `ExamLoopService`, it is replaced by the entry as stored, which
    /// may carry a different id after a collision.
    #[must_use]
    pub fn result(&self) -> Option<&HistoryEntry> {
        self.result.as_ref()
    }

    pub(crate) fn record_stored(&mut self, stored: &HistoryEntry) {
        if self.result.is_some() {
            self.result = Some(stored.clone());
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.answered_count(),
            current: self.current,
            remaining_secs: self.countdown.remaining_secs(),
            total_secs: self.countdown.total_secs(),
            is_terminated: !self.is_active(),
        }
    }

    /// Record `choice` for the question with `question_id`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Terminated` after termination,
    /// `ExamError::UnknownQuestion` for a question outside this session, and
    /// `ExamError::InvalidChoice` if `choice` is not one of its choices.
    pub fn select_answer(
        &mut self,
        question_id: QuestionId,
        choice: impl Into<String>,
    ) -> Result<(), ExamError> {
        self.ensure_active()?;
        let question = self
            .questions
            .iter()
            .find(|q| q.id() == question_id)
            .ok_or(ExamError::UnknownQuestion(question_id))?;

        self.answers.set(question, choice).map_err(|err| match err {
            AnswerError::InvalidChoice {
                question_id,
                choice,
            } => ExamError::InvalidChoice {
                question_id,
                choice,
            },
        })
    }

    /// Record `choice` for the current question.
    ///
    /// # Errors
    ///
    /// Same as [`ExamSession::select_answer`].
    pub fn select_current(&mut self, choice: impl Into<String>) -> Result<(), ExamError> {
        let question_id = self.current_question().id();
        self.select_answer(question_id, choice)
    }

    /// Jump to any question in `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::InvalidIndex` when out of range and
    /// `ExamError::Terminated` after termination; the pointer is unchanged.
    pub fn navigate(&mut self, index: usize) -> Result<(), ExamError> {
        self.ensure_active()?;
        if index >= self.questions.len() {
            return Err(ExamError::InvalidIndex {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Finish after confirmation. A declined prompt returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Terminated` if the session already ended.
    pub fn finish(&mut self, confirm: &dyn Confirm) -> Result<Option<HistoryEntry>, ExamError> {
        self.ensure_active()?;
        if !confirm.confirm(Prompt::Finish) {
            return Ok(None);
        }
        Ok(Some(self.terminate(Outcome::Finished)))
    }

    /// Give up after confirmation. A declined prompt returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Terminated` if the session already ended.
    pub fn give_up(&mut self, confirm: &dyn Confirm) -> Result<Option<HistoryEntry>, ExamError> {
        self.ensure_active()?;
        if !confirm.confirm(Prompt::GiveUp) {
            return Ok(None);
        }
        Ok(Some(self.terminate(Outcome::GaveUp)))
    }

    /// Apply one countdown tick. Returns the entry when time just ran out.
    ///
    /// Ticks delivered after termination are ignored.
    pub fn tick(&mut self) -> Option<HistoryEntry> {
        if !self.is_active() {
            return None;
        }
        match self.countdown.tick() {
            Tick::Completed => Some(self.terminate(Outcome::TimedOut)),
            Tick::Running(_) | Tick::Idle => None,
        }
    }

    fn ensure_active(&self) -> Result<(), ExamError> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Terminated(_) => Err(ExamError::Terminated),
        }
    }

    fn terminate(&mut self, outcome: Outcome) -> HistoryEntry {
        self.countdown.cancel();

        let score = Score::compute(&self.questions, &self.answers);
        let entry = HistoryEntry::new(
            HistoryEntryId::new(self.clock.epoch_millis()),
            self.config.title(),
            self.clock.today(),
            score,
            self.countdown.elapsed_secs(),
            outcome,
        );

        self.state = SessionState::Terminated(outcome);
        self.result = Some(entry.clone());
        log::info!(
            "session {:?} for exam {} ended: {outcome:?}, score {}, {}s",
            self.config.title(),
            self.config.exam_id(),
            entry.score,
            entry.time_taken
        );
        entry
    }
}

impl fmt::Debug for ExamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamSession")
            .field("exam_id", &self.config.exam_id())
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.answered_count())
            .field("current", &self.current)
            .field("remaining_secs", &self.countdown.remaining_secs())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
