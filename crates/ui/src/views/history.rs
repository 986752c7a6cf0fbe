use dioxus::prelude::*;
use dioxus_router::Link;
use services::Prompt;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::dialog::ask;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryCardVm, map_history_cards};

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<HistoryCardVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.history();
    let mut clear_error = use_signal(|| None::<&'static str>);

    let mut resource = use_resource({
        let history = history.clone();
        move || {
            let history = history.clone();
            async move {
                let entries = history.list().await.map_err(|_| ViewError::Storage)?;
                Ok(HistoryData {
                    cards: map_history_cards(&entries),
                })
            }
        }
    });

    let state = view_state_from_resource(&resource);

    let clear = move |_: MouseEvent| {
        let history = history.clone();
        spawn(async move {
            let confirmed = ask(Prompt::ClearHistory).await;
            match history.clear(&confirmed).await {
                Ok(true) => {
                    clear_error.set(None);
                    resource.restart();
                }
                Ok(false) => {}
                Err(_) => clear_error.set(Some("History could not be cleared.")),
            }
        });
    };

    rsx! {
        div { class: "app",
            aside { class: "sidebar",
                Link { class: "back-link", to: Route::Catalog {}, "← Back" }
                button { class: "danger", onclick: clear, "Clear history" }
            }

            main { class: "content",
                h2 { "Exam history" }

                if let Some(message) = clear_error() {
                    p { class: "error", "{message}" }
                }

                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(data) => rsx! {
                        if data.cards.is_empty() {
                            p { class: "empty", "No exams taken yet." }
                        } else {
                            div { class: "history-grid",
                                for card in data.cards {
                                    HistoryCard { key: "{card.id}", card }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardVm) -> Element {
    rsx! {
        div { class: "history-card",
            h3 { "{card.title}" }
            p { class: "history-date", "Date: {card.date}" }
            p { class: "history-score", "Correct: {card.score}" }
            p { "Total questions: {card.total_questions}" }
            p { "Status: {card.status}" }
            p { "Time spent: {card.time_taken_str}" }
        }
    }
}
