use dioxus::prelude::*;

use crate::nav::Icon;
use crate::{logout, Services};

#[component]
pub fn Header() -> Element {
    let services = use_context::<Services>();

    rsx! {
        div { class: "header",
            h2 { class: "brand", "ScanForChange" }
            button {
                class: "logout",
                onclick: move |_| logout(&services),
                span { class: Icon::LogOut.class(), aria_hidden: "true" }
                "Logout"
            }
        }
    }
}
