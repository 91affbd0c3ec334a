use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    auth::service::UserService, config::AppConfig, guard::NavigationGuard, layouts::guard::AppGuard, router::Route,
    theme::{ThemeConfig, ThemeName},
};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::default);
    let theme_config = use_context_provider(ThemeConfig::create);

    let persistence = config.persistence;
    let theme = use_context_provider(|| Signal::new(ThemeName::retrieve(persistence)));

    use_context_provider(|| {
        let service = UserService::new(config.api_url.as_str(), config.session());
        let guard: AppGuard = NavigationGuard::new(config.session(), service).with_refresh_policy(config.refresh_policy);

        Arc::new(guard)
    });

    let stylesheet = use_hook(|| theme_config.stylesheet());
    let theme_color = theme_config.palette(theme()).colors.primary.as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        document::Meta { name: "theme-color", content: theme_color }
        document::Style { "{stylesheet}" }

        div {
            class: theme().class(),
            Router::<Route> {}
        }
    }
}
