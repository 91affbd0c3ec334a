use dioxus::{logger::tracing, prelude::*};

use crate::{auth::session::SessionProvider, config::AppConfig, router::Route, theme::ThemeName};

#[component]
pub fn NavbarComponent() -> Element {
    let config = use_context::<AppConfig>();
    let mut theme = use_context::<Signal<ThemeName>>();

    // re-read on every render, another tab may have logged in or out
    let signed_in = config.session().token().is_some();
    let persistence = config.persistence;

    let toggle_theme = move |_| {
        let next = theme().toggle();
        theme.set(next);

        if let Err(error) = next.persist(persistence) {
            tracing::warn!("{error:?}");
        }
    };

    rsx! {
        nav {
            class: "flex gap-4 p-4 bg-[rgb(var(--theme-primary))] text-white",

            if signed_in {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Vm {}, "VM" }
                Link { to: Route::K8s {}, "K8s" }
                Link { to: Route::Profile {}, "Profile" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Logout {}, "Logout" }
            } else {
                Link { to: Route::Landing {}, "Welcome" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Signup {}, "Sign up" }
            }

            button {
                onclick: toggle_theme,
                class: "ml-auto",

                if theme() == ThemeName::Light { "Dark mode" } else { "Light mode" }
            }
        }
    }
}
