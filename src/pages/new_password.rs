use dioxus::prelude::*;

#[component]
pub fn NewPasswordPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Choose a new password" }
        }
    }
}
