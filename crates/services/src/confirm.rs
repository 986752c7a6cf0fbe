//! Yes/no confirmation asked before destructive actions.

/// What the user is asked to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    GiveUp,
    Finish,
    ClearHistory,
}

impl Prompt {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Prompt::GiveUp => "Are you sure you want to give up this exam?",
            Prompt::Finish => "Are you sure you want to finish this exam?",
            Prompt::ClearHistory => "Are you sure you want to clear the whole history?",
        }
    }
}

/// Synchronous confirmation collaborator. `false` means "cancel".
pub trait Confirm {
    fn confirm(&self, prompt: Prompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(Prompt) -> bool,
{
    fn confirm(&self, prompt: Prompt) -> bool {
        self(prompt)
    }
}

/// An answer already collected from a dialog.
impl Confirm for bool {
    fn confirm(&self, _prompt: Prompt) -> bool {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closures_see_the_prompt() {
        let asked = Cell::new(None);
        let confirm = |prompt: Prompt| {
            asked.set(Some(prompt));
            prompt == Prompt::Finish
        };
        assert!(confirm.confirm(Prompt::Finish));
        assert!(!confirm.confirm(Prompt::GiveUp));
        assert_eq!(asked.get(), Some(Prompt::GiveUp));
    }

    #[test]
    fn bool_is_a_prefetched_answer() {
        assert!(true.confirm(Prompt::ClearHistory));
        assert!(!false.confirm(Prompt::ClearHistory));
    }
}
