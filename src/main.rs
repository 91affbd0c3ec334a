mod app;
mod auth;
mod components;
mod config;
mod guard;
mod layouts;
mod pages;
mod router;
mod theme;

fn main() {
    dioxus::launch(app::App);
}
