use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{CatalogView, ExamView, HistoryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", CatalogView)] Catalog {},
    #[route("/exam/:exam_id", ExamView)] Exam { exam_id: u64 },
    #[route("/history", HistoryView)] History {},
}
