use exam_core::model::{HistoryEntry, HistoryEntryId};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub id: HistoryEntryId,
    pub title: String,
    pub date: String,
    pub score: String,
    pub total_questions: u32,
    pub status: &'static str,
    pub time_taken_str: String,
}

impl From<&HistoryEntry> for HistoryCardVm {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            date: entry.date.clone(),
            score: entry.score.clone(),
            total_questions: entry.total_questions,
            status: status_label(entry.completed),
            time_taken_str: format_elapsed(entry.time_taken),
        }
    }
}

#[must_use]
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "Finished"
    } else {
        "Gave up / time expired"
    }
}

#[must_use]
pub fn map_history_cards(entries: &[HistoryEntry]) -> Vec<HistoryCardVm> {
    entries.iter().map(HistoryCardVm::from).collect()
}
