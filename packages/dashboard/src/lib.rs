//! The ScanForChange dashboard.
//!
//! A sidebar of five tabs, a stats block fed by the signed-in user's profile and a logout button.
//! The profile is loaded once when the dashboard mounts and handed down to the tab views as a prop.

#![allow(non_snake_case)]

pub mod components;
pub mod nav;
pub mod router;
mod services;
pub mod views;

pub use router::Route;
pub use services::{logout, sign_out, Services};

use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component. Installs the platform services and mounts the router.
#[component]
pub fn App() -> Element {
    use_context_provider(Services::for_platform);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
