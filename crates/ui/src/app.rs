use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::LastResult;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    LastResult::provide();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Mock Exams" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
