use std::sync::Arc;

use dioxus::{logger::tracing, prelude::*};

use crate::{
    auth::{service::UserService, session::BrowserSession},
    guard::{NavigationGuard, Settled, is_admitted},
    layouts::{default::DefaultLayout, no_navbar::NoNavbarLayout},
    router::{LayoutKind, Route},
};

pub type AppGuard = NavigationGuard<BrowserSession, UserService<BrowserSession>>;

/// Runs the navigation guard on every route change, then frames the page
/// according to the route's layout hint.
#[component]
pub fn GuardLayout() -> Element {
    let guard = use_context::<Arc<AppGuard>>();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let mut admitted = use_signal(|| None::<Route>);
    let mut pending = use_signal(|| None::<Route>);

    use_effect(use_reactive((&route,), move |(route,)| {
        let guard = Arc::clone(&guard);
        let from = admitted.peek().clone();
        pending.set(Some(route.clone()));

        spawn(async move {
            let decision = guard.before_each(&route, from.as_ref()).await;
            let name = route.name();

            match decision.settle(pending.peek().as_ref(), route) {
                Settled::Admit(route) => admitted.set(Some(route)),
                Settled::Redirect(target) => {
                    navigator.replace(target);
                }
                Settled::Stale => tracing::debug!("dropping stale decision for {name}"),
            }
        });
    }));

    let content = if is_admitted(admitted.read().as_ref(), &route) {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {
            p {
                class: "p-10",
                "Authorizing..."
            }
        }
    };

    match route.meta().layout {
        LayoutKind::Default => rsx! { DefaultLayout { {content} } },
        LayoutKind::NoNavbar => rsx! { NoNavbarLayout { {content} } },
    }
}
