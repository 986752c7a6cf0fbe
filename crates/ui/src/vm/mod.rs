mod catalog_vm;
mod exam_vm;
mod history_vm;
mod time_fmt;

pub use catalog_vm::{ListingCardVm, map_listing_cards};
pub use exam_vm::{ChoiceVm, ExamVm, QuestionNavVm, ResultBannerVm};
pub use history_vm::{HistoryCardVm, map_history_cards, status_label};
pub use time_fmt::{format_countdown, format_elapsed};
