use std::fmt;

use crate::model::ids::ExamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A mock exam offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamListing {
    pub id: ExamId,
    pub title: String,
    pub institution: String,
    pub disciplines: Vec<String>,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub question_count: u32,
}

impl ExamListing {
    #[must_use]
    pub fn has_discipline(&self, discipline: &str) -> bool {
        self.disciplines.iter().any(|d| d == discipline)
    }
}
