mod answer;
mod history;
mod ids;
mod listing;
mod question;
mod session;

pub use ids::{ExamId, HistoryEntryId, ParseIdError, QuestionId};

pub use answer::{AnswerError, AnswerSheet};
pub use history::{HistoryEntry, Score, ScoreParseError};
pub use listing::{Difficulty, ExamListing};
pub use question::{Question, QuestionError};
pub use session::{Outcome, SessionConfig, SessionConfigError};
