use std::collections::HashMap;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("{choice:?} is not a choice of question {question_id}")]
    InvalidChoice {
        question_id: QuestionId,
        choice: String,
    },
}

/// Selected choices for one session, keyed by question.
///
/// Entries exist only for answered questions. There is no removal; the sheet
/// lives as long as its session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selected: HashMap<QuestionId, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `choice` for `question`, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::InvalidChoice` if `choice` is not one of the
    /// question's choices; the sheet is left untouched.
    pub fn set(&mut self, question: &Question, choice: impl Into<String>) -> Result<(), AnswerError> {
        let choice = choice.into();
        if !question.has_choice(&choice) {
            return Err(AnswerError::InvalidChoice {
                question_id: question.id(),
                choice,
            });
        }
        self.selected.insert(question.id(), choice);
        Ok(())
    }

    /// The selected choice, or `None` while unanswered.
    #[must_use]
    pub fn get(&self, question_id: QuestionId) -> Option<&str> {
        self.selected.get(&question_id).map(String::as_str)
    }

    #[must_use]
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.selected.contains_key(&question_id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    /// Number of `questions` whose selected choice is the correct one.
    #[must_use]
    pub fn correct_count(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .filter(|q| self.get(q.id()).is_some_and(|choice| q.is_correct(choice)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            vec!["a".into(), "b".into(), "c".into()],
            correct,
        )
        .unwrap()
    }

    #[test]
    fn latest_selection_wins() {
        let q = question(1, "a");
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.get(q.id()), None);

        sheet.set(&q, "b").unwrap();
        sheet.set(&q, "c").unwrap();
        sheet.set(&q, "a").unwrap();
        assert_eq!(sheet.get(q.id()), Some("a"));
        assert_eq!(sheet.answered_count(), 1);
    }

    #[test]
    fn invalid_choice_is_rejected_without_change() {
        let q = question(1, "a");
        let mut sheet = AnswerSheet::new();
        sheet.set(&q, "b").unwrap();

        let err = sheet.set(&q, "z").unwrap_err();
        assert!(matches!(err, AnswerError::InvalidChoice { .. }));
        assert_eq!(sheet.get(q.id()), Some("b"));
    }

    #[test]
    fn counts_only_correct_answers() {
        let questions = vec![question(1, "a"), question(2, "b"), question(3, "c")];
        let mut sheet = AnswerSheet::new();
        sheet.set(&questions[0], "a").unwrap();
        sheet.set(&questions[1], "c").unwrap();

        assert_eq!(sheet.correct_count(&questions), 1);
        assert!(!sheet.is_answered(QuestionId::new(3)));
    }
}
