use thiserror::Error;

use crate::model::ids::ExamId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionConfigError {
    #[error("session title cannot be empty")]
    EmptyTitle,

    #[error("session duration must be > 0 minutes")]
    ZeroDuration,
}

/// Parameters supplied once when a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    title: String,
    duration_minutes: u32,
    exam_id: ExamId,
}

impl SessionConfig {
    /// # Errors
    ///
    /// Returns `SessionConfigError` for a blank title or a zero duration.
    pub fn new(
        title: impl Into<String>,
        duration_minutes: u32,
        exam_id: ExamId,
    ) -> Result<Self, SessionConfigError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SessionConfigError::EmptyTitle);
        }
        if duration_minutes == 0 {
            return Err(SessionConfigError::ZeroDuration);
        }
        Ok(Self {
            title,
            duration_minutes,
            exam_id,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn total_secs(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    #[must_use]
    pub fn exam_id(&self) -> ExamId {
        self.exam_id
    }
}

/// How a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed "finish".
    Finished,
    /// The user confirmed "give up".
    GaveUp,
    /// The countdown reached zero.
    TimedOut,
}

impl Outcome {
    /// Only an explicit finish counts as a completed attempt.
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validates_and_converts_minutes() {
        let cfg = SessionConfig::new("Mock", 2, ExamId::new(7)).unwrap();
        assert_eq!(cfg.total_secs(), 120);
        assert_eq!(cfg.exam_id(), ExamId::new(7));

        assert_eq!(
            SessionConfig::new(" ", 2, ExamId::new(7)).unwrap_err(),
            SessionConfigError::EmptyTitle
        );
        assert_eq!(
            SessionConfig::new("Mock", 0, ExamId::new(7)).unwrap_err(),
            SessionConfigError::ZeroDuration
        );
    }

    #[test]
    fn only_finish_is_completed() {
        assert!(Outcome::Finished.is_completed());
        assert!(!Outcome::GaveUp.is_completed());
        assert!(!Outcome::TimedOut.is_completed());
    }
}
