use dioxus::prelude::*;

#[component]
pub fn SuccessPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Payment succeeded" }
        }
    }
}
