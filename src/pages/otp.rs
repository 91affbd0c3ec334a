use dioxus::prelude::*;

#[component]
pub fn OtpPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Enter the verification code sent to your email" }
        }
    }
}
