use dioxus::prelude::*;

#[component]
pub fn ChangePasswordPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Change password" }
        }
    }
}
