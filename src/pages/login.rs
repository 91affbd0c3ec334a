use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Sign in" }
            Link { to: Route::ForgetPassword {}, "Forgot your password?" }
            Link { to: Route::Signup {}, "Create an account" }
        }
    }
}
