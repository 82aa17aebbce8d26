use dioxus::prelude::*;

use crate::Route;

/// Where logout lands. The sign-in form lives outside the dashboard and writes the token the
/// dashboard reads.
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "login",
            h2 { "You are signed out" }
            p { "Sign in again to see your dashboard." }
            Link { to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}
