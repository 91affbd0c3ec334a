use dioxus::prelude::*;

#[component]
pub fn ForgetPasswordPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Forgot your password?" }
        }
    }
}
