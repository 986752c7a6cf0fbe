mod catalog;
mod dialog;
mod exam;
mod history;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use catalog::CatalogView;
pub use exam::ExamView;
pub use history::HistoryView;
pub use state::{ViewError, ViewState, view_state_from_resource};
