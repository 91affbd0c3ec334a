use dioxus::prelude::*;

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Cloud for students" }
        }
    }
}
