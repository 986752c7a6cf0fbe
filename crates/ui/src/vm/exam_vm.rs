use services::{ExamSession, SessionEnded};

use crate::vm::time_fmt::format_countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionNavVm {
    pub index: usize,
    pub label: String,
    pub answered: bool,
    pub current: bool,
}

/// Render-ready snapshot of a running exam.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamVm {
    pub title: String,
    pub position_label: String,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub nav: Vec<QuestionNavVm>,
    pub time_left: String,
    pub timer_percent: f64,
    pub answered_label: String,
    pub is_active: bool,
}

impl ExamVm {
    #[must_use]
    pub fn from_session(session: &ExamSession) -> Self {
        let progress = session.progress();
        let current = session.current_question();
        let selected = session.answer_for(current.id());

        let choices = current
            .choices()
            .iter()
            .map(|text| ChoiceVm {
                text: text.clone(),
                selected: selected == Some(text.as_str()),
            })
            .collect();

        let nav = session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionNavVm {
                index,
                label: format!("Question {}", index + 1),
                answered: session.answer_for(question.id()).is_some(),
                current: index == progress.current,
            })
            .collect();

        Self {
            title: session.config().title().to_string(),
            position_label: format!("Question {} of {}", progress.current + 1, progress.total),
            prompt: current.prompt().to_string(),
            choices,
            nav,
            time_left: format_countdown(progress.remaining_secs),
            timer_percent: session.countdown().remaining_percent(),
            answered_label: format!("{}/{} answered", progress.answered, progress.total),
            is_active: !progress.is_terminated,
        }
    }
}

/// Message shown on the catalog page after a session ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBannerVm {
    pub title: String,
    pub score: String,
    pub saved: bool,
}

impl From<&SessionEnded> for ResultBannerVm {
    fn from(ended: &SessionEnded) -> Self {
        Self {
            title: ended.entry.title.clone(),
            score: ended.entry.score.clone(),
            saved: ended.is_persisted(),
        }
    }
}

impl ResultBannerVm {
    #[must_use]
    pub fn message(&self) -> String {
        let base = format!("{}: you got {} questions right.", self.title, self.score);
        if self.saved {
            base
        } else {
            format!("{base} The result could not be saved to history.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{ExamId, QuestionId, SessionConfig};
    use exam_core::time::fixed_clock;
    use exam_core::Catalog;

    fn session(minutes: u32) -> ExamSession {
        let catalog = Catalog::builtin().unwrap();
        let questions = catalog.questions_for(ExamId::new(1)).unwrap().to_vec();
        let config = SessionConfig::new("ENEM 2023", minutes, ExamId::new(1)).unwrap();
        ExamSession::new(config, questions, fixed_clock()).unwrap()
    }

    #[test]
    fn snapshot_tracks_selection_and_navigation() {
        let mut session = session(2);
        session.select_answer(QuestionId::new(2), "Brasília").unwrap();
        session.navigate(1).unwrap();
        session.tick();

        let vm = ExamVm::from_session(&session);
        assert_eq!(vm.position_label, "Question 2 of 5");
        assert_eq!(vm.time_left, "01:59");
        assert_eq!(vm.answered_label, "1/5 answered");
        assert!(vm.is_active);

        let selected: Vec<_> = vm.choices.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].text, "Brasília");

        assert!(vm.nav[1].answered && vm.nav[1].current);
        assert!(!vm.nav[0].answered && !vm.nav[0].current);
    }

    #[test]
    fn timer_percent_follows_remaining_time() {
        let mut session = session(1);
        for _ in 0..15 {
            session.tick();
        }
        let vm = ExamVm::from_session(&session);
        assert!((vm.timer_percent - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn banner_mentions_unsaved_results() {
        let mut session = session(1);
        let entry = session.finish(&true).unwrap().expect("confirmed");
        let mut ended = SessionEnded {
            entry,
            persist_error: None,
        };
        assert_eq!(
            ResultBannerVm::from(&ended).message(),
            "ENEM 2023: you got 0/5 questions right."
        );

        ended.persist_error = Some(storage::repository::StorageError::Connection(
            "locked".to_string(),
        ));
        assert!(ResultBannerVm::from(&ended).message().ends_with("could not be saved to history."));
    }
}
