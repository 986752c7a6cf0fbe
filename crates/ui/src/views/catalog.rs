use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use exam_core::CatalogFilter;

use crate::context::{AppContext, LastResult};
use crate::routes::Route;
use crate::vm::{ListingCardVm, map_listing_cards};

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();
    let last_result = use_context::<LastResult>();
    let catalog = ctx.catalog();
    let mut filter = use_signal(CatalogFilter::default);

    let page = use_memo(move || catalog.search(&filter.read()));
    let page = page.read().clone();
    let cards = map_listing_cards(&page.listings);
    let current = filter.read().clone();
    let banner = last_result.get();

    rsx! {
        div { class: "app",
            aside { class: "sidebar",
                h1 { "Mock Exams" }
                input {
                    r#type: "search",
                    placeholder: "Search by title",
                    value: "{current.search_term}",
                    oninput: move |evt: FormEvent| filter.write().search_term = evt.value(),
                }

                h3 { "Institution" }
                div { class: "facets",
                    for institution in page.institutions {
                        button {
                            key: "{institution}",
                            class: if current.institution.as_deref() == Some(institution.as_str()) { "facet active" } else { "facet" },
                            onclick: {
                                let institution = institution.clone();
                                move |_| filter.write().toggle_institution(&institution)
                            },
                            "{institution}"
                        }
                    }
                }

                h3 { "Discipline" }
                div { class: "facets",
                    for discipline in page.disciplines {
                        button {
                            key: "{discipline}",
                            class: if current.discipline.as_deref() == Some(discipline.as_str()) { "facet active" } else { "facet" },
                            onclick: {
                                let discipline = discipline.clone();
                                move |_| filter.write().toggle_discipline(&discipline)
                            },
                            "{discipline}"
                        }
                    }
                }

                h3 { "Difficulty" }
                div { class: "facets",
                    for difficulty in page.difficulties {
                        button {
                            key: "{difficulty}",
                            class: if current.difficulty == Some(difficulty) { "facet active" } else { "facet" },
                            onclick: move |_| filter.write().toggle_difficulty(difficulty),
                            "{difficulty}"
                        }
                    }
                }

                Link { class: "history-link", to: Route::History {}, "History" }
            }

            main { class: "content",
                if let Some(banner) = banner {
                    div { class: if banner.saved { "banner" } else { "banner warning" },
                        span { "{banner.message()}" }
                        button { class: "banner-close", onclick: move |_| last_result.clear(), "Dismiss" }
                    }
                }

                h2 { "Available exams" }
                if cards.is_empty() {
                    p { class: "empty", "No exam matches the selected filters." }
                } else {
                    div { class: "listing-grid",
                        for card in cards {
                            ListingCard { key: "{card.id}", card }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListingCard(card: ListingCardVm) -> Element {
    let navigator = use_navigator();
    let last_result = use_context::<LastResult>();
    let exam_id = card.id.value();

    rsx! {
        div { class: "listing-card",
            h3 { "{card.title}" }
            p { class: "listing-institution", "{card.institution}" }
            p { "Disciplines: {card.disciplines}" }
            p { "Difficulty: {card.difficulty}" }
            p { "Duration: {card.duration} | Questions: {card.question_count}" }
            button {
                class: "primary",
                onclick: move |_| {
                    last_result.clear();
                    let _ = navigator.push(Route::Exam { exam_id });
                },
                "Start"
            }
        }
    }
}
