use dioxus::prelude::*;

/// Never shown for long: the guard sends `/` to home or to the login page.
#[component]
pub fn RootPage() -> Element {
    rsx! {
        p { class: "p-10", "Redirecting..." }
    }
}
