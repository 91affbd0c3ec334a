use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "p-10 grid gap-5 text-center",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
