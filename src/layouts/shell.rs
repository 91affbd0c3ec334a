use dioxus::prelude::*;

use crate::router::{Route, RouteDescriptor};

/// Signed-in area under `/`: side menu built from the shell's children.
#[component]
pub fn ShellLayout() -> Element {
    let (pages, actions): (Vec<RouteDescriptor>, Vec<RouteDescriptor>) = Route::table()
        .into_iter()
        .filter(|descriptor| descriptor.route.is_root())
        .flat_map(|descriptor| descriptor.children)
        .partition(|child| child.meta.required_auth);

    rsx! {
        div {
            class: "flex",

            aside {
                class: "w-48 p-4 grid gap-2 content-start bg-[rgb(var(--theme-background))]",
                for page in pages {
                    Link { key: "{page.path}", to: page.route.clone(), "{page.name}" }
                }
                hr {}
                for action in actions {
                    Link { key: "{action.path}", to: action.route.clone(), "{action.name}" }
                }
            }
            section {
                class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
