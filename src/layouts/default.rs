use dioxus::prelude::*;

use crate::components::navbar::NavbarComponent;

#[component]
pub fn DefaultLayout(children: Element) -> Element {
    rsx! {
        NavbarComponent {}

        main {
            class: "min-h-screen",
            {children}
        }
    }
}
