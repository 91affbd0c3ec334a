use dioxus::prelude::*;

#[component]
pub fn SignupPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Create an account" }
        }
    }
}
