use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, Navigator, use_navigator};
use exam_core::model::{ExamId, HistoryEntry};
use services::{ExamError, ExamLoopService, ExamSession, Prompt, SessionTicker};

use crate::context::{AppContext, LastResult};
use crate::routes::Route;
use crate::views::dialog::ask;
use crate::vm::{ExamVm, ResultBannerVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EndAction {
    Finish,
    GiveUp,
}

impl EndAction {
    fn prompt(self) -> Prompt {
        match self {
            EndAction::Finish => Prompt::Finish,
            EndAction::GiveUp => Prompt::GiveUp,
        }
    }
}

/// Persist the finished entry, leave a banner for the catalog page and go back there.
async fn record(
    exam_loop: Arc<ExamLoopService>,
    entry: HistoryEntry,
    last_result: LastResult,
    navigator: Navigator,
) {
    let ended = exam_loop.complete(entry).await;
    last_result.set(ResultBannerVm::from(&ended));
    let _ = navigator.push(Route::Catalog {});
}

/// Only a session that is still running needs a countdown.
fn needs_ticker(session: &Result<ExamSession, ExamError>) -> bool {
    session.as_ref().is_ok_and(ExamSession::is_active)
}

#[component]
pub fn ExamView(exam_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let last_result = use_context::<LastResult>();
    let navigator = use_navigator();
    let exam_loop = ctx.exam_loop();

    let mut session = use_signal({
        let exam_loop = Arc::clone(&exam_loop);
        move || exam_loop.start_listing(ExamId::new(exam_id))
    });
    let mut error = use_signal(|| None::<String>);

    let mut ticker = use_future({
        let exam_loop = Arc::clone(&exam_loop);
        move || {
            let exam_loop = Arc::clone(&exam_loop);
            async move {
                if !needs_ticker(&session.read()) {
                    return;
                }
                let mut ticks = SessionTicker::spawn();
                while ticks.next().await.is_some() {
                    let expired = session.write().as_mut().ok().and_then(ExamSession::tick);
                    if let Some(entry) = expired {
                        ticks.cancel();
                        record(exam_loop, entry, last_result, navigator).await;
                        break;
                    }
                }
            }
        }
    });

    let end = move |action: EndAction| {
        let exam_loop = Arc::clone(&exam_loop);
        spawn(async move {
            let confirmed = ask(action.prompt()).await;
            let outcome = match session.write().as_mut() {
                Ok(active) => match action {
                    EndAction::Finish => active.finish(&confirmed),
                    EndAction::GiveUp => active.give_up(&confirmed),
                },
                Err(_) => return,
            };
            match outcome {
                Ok(Some(entry)) => {
                    ticker.cancel();
                    record(exam_loop, entry, last_result, navigator).await;
                }
                // Declined, or time ran out while the dialog was open.
                Ok(None) | Err(ExamError::Terminated) => {}
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let vm = match &*session.read() {
        Ok(active) => Ok(ExamVm::from_session(active)),
        Err(err) => Err(err.to_string()),
    };

    let vm = match vm {
        Ok(vm) => vm,
        Err(message) => {
            return rsx! {
                div { class: "page",
                    h2 { "Exam unavailable" }
                    p { "{message}" }
                    Link { to: Route::Catalog {}, "Back to exams" }
                }
            };
        }
    };

    let mut select = move |choice: String| {
        let result = session
            .write()
            .as_mut()
            .map_err(|_| ExamError::Terminated)
            .and_then(|active| active.select_current(choice));
        error.set(result.err().map(|err| err.to_string()));
    };

    let mut go_to = move |index: usize| {
        let result = session
            .write()
            .as_mut()
            .map_err(|_| ExamError::Terminated)
            .and_then(|active| active.navigate(index));
        error.set(result.err().map(|err| err.to_string()));
    };

    let end_finish = end.clone();
    let end_give_up = end;

    rsx! {
        div { class: "app", id: "exam-root",
            aside { class: "sidebar",
                h3 { "Questions" }
                ul { class: "question-nav",
                    for item in vm.nav {
                        li {
                            key: "{item.index}",
                            class: match (item.current, item.answered) {
                                (true, _) => "nav-item current",
                                (false, true) => "nav-item answered",
                                (false, false) => "nav-item",
                            },
                            onclick: {
                                let index = item.index;
                                move |_| go_to(index)
                            },
                            "{item.label}"
                        }
                    }
                }
            }

            main { class: "content",
                header { class: "exam-header",
                    h2 { "{vm.title}" }
                    div { class: "timer",
                        span { class: "timer-label", "Time left: {vm.time_left}" }
                        progress { max: "100", value: "{vm.timer_percent}" }
                    }
                }

                section { class: "question",
                    h3 { "{vm.position_label}" }
                    p { class: "prompt", "{vm.prompt}" }
                    div { class: "choices",
                        for choice in vm.choices {
                            button {
                                key: "{choice.text}",
                                class: if choice.selected { "choice selected" } else { "choice" },
                                disabled: !vm.is_active,
                                onclick: {
                                    let text = choice.text.clone();
                                    move |_| select(text.clone())
                                },
                                "{choice.text}"
                            }
                        }
                    }
                }

                if let Some(message) = error.read().clone() {
                    p { class: "error", "{message}" }
                }

                footer { class: "exam-actions",
                    span { class: "answered", "{vm.answered_label}" }
                    button {
                        class: "danger",
                        disabled: !vm.is_active,
                        onclick: move |_| end_give_up(EndAction::GiveUp),
                        "Give up"
                    }
                    button {
                        class: "primary",
                        disabled: !vm.is_active,
                        onclick: move |_| end_finish(EndAction::Finish),
                        "Finish"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use exam_core::Catalog;
    use exam_core::model::ExamId;
    use exam_core::time::fixed_clock;
    use services::{ExamError, ExamLoopService};
    use storage::ledger::HistoryLedger;
    use storage::repository::InMemoryStore;

    use super::needs_ticker;

    #[test]
    fn ticker_is_skipped_without_a_running_session() {
        let ledger = HistoryLedger::new(Arc::new(InMemoryStore::new()));
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let exam_loop = ExamLoopService::new(fixed_clock(), catalog, ledger);

        assert!(!needs_ticker(&Err(ExamError::UnknownExam(ExamId::new(404)))));
        assert!(!needs_ticker(&exam_loop.start_listing(ExamId::new(404))));

        let mut session = exam_loop.start_listing(ExamId::new(6));
        assert!(needs_ticker(&session));

        if let Ok(active) = session.as_mut() {
            assert!(active.give_up(&true).unwrap().is_some());
        }
        assert!(!needs_ticker(&session));
    }
}
