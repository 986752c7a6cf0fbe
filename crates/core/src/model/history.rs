use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::AnswerSheet;
use crate::model::ids::HistoryEntryId;
use crate::model::question::Question;
use crate::model::session::Outcome;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid score {0:?}, expected \"correct/total\"")]
pub struct ScoreParseError(String);

/// Correct answers out of the question count, shown as `"correct/total"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    total: u32,
}

impl Score {
    /// Score an answer sheet against the session's fixed question set.
    #[must_use]
    pub fn compute(questions: &[Question], answers: &AnswerSheet) -> Self {
        let correct = u32::try_from(answers.correct_count(questions)).unwrap_or(u32::MAX);
        let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

impl FromStr for Score {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScoreParseError(s.to_string());
        let (correct, total) = s.split_once('/').ok_or_else(invalid)?;
        let correct = correct.trim().parse::<u32>().map_err(|_| invalid())?;
        let total = total.trim().parse::<u32>().map_err(|_| invalid())?;
        if correct > total {
            return Err(invalid());
        }
        Ok(Self { correct, total })
    }
}

//
// ─── HISTORY ENTRY ─────────────────────────────────────────────────────────────
//

/// Persisted summary of one finished or abandoned session.
///
/// Field names follow the stored JSON layout (`correctCount`, `timeTaken`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub title: String,
    pub date: String,
    pub score: String,
    pub correct_count: u32,
    pub total_questions: u32,
    /// Seconds spent, within `[0, total]` of the session's countdown.
    pub time_taken: u32,
    /// True only when the user explicitly finished.
    pub completed: bool,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(
        id: HistoryEntryId,
        title: impl Into<String>,
        date: impl Into<String>,
        score: Score,
        time_taken: u32,
        outcome: Outcome,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            score: score.to_string(),
            correct_count: score.correct(),
            total_questions: score.total(),
            time_taken,
            completed: outcome.is_completed(),
        }
    }

    /// Same entry under a different identifier.
    #[must_use]
    pub fn with_id(mut self, id: HistoryEntryId) -> Self {
        self.id = id;
        self
    }
}
