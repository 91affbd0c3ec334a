use dioxus::prelude::*;

#[component]
pub fn MaintenancePage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5 text-center",
            h1 { "Under maintenance" }
            p { "We will be back shortly." }
        }
    }
}
