use dioxus::prelude::*;

#[component]
pub fn NoNavbarLayout(children: Element) -> Element {
    rsx! {
        main {
            class: "min-h-screen grid place-items-center",
            {children}
        }
    }
}
