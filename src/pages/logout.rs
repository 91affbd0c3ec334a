use dioxus::{logger::tracing, prelude::*};

use crate::{auth::session::SessionProvider, config::AppConfig, router::Route};

#[component]
pub fn LogoutPage() -> Element {
    let config = use_context::<AppConfig>();
    let navigator = use_navigator();

    use_effect(move || {
        if let Err(error) = config.session().clear() {
            tracing::error!("{error:?}");
        }

        navigator.replace(Route::Login {});
    });

    rsx! {
        p { class: "p-10", "Signing out..." }
    }
}
