use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",

            span {
                class: "grid overflow-x-auto",
                "Welcome back!"
            }
            Link { to: Route::Vm {}, "Deploy a virtual machine" }
            Link { to: Route::K8s {}, "Deploy a kubernetes cluster" }
        }
    }
}
