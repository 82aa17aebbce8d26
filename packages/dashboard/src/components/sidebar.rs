use dioxus::prelude::*;

use crate::nav::TABS;
use crate::Route;

/// The five dashboard tabs. The tab matching `current` is highlighted.
#[component]
pub fn Sidebar(current: Route) -> Element {
    rsx! {
        nav { class: "sidebar",
            ul {
                for tab in TABS.iter() {
                    li { key: "{tab.id}",
                        Link {
                            to: tab.route.clone(),
                            class: tab.link_class(&current).to_string(),
                            span { class: tab.icon.class(), aria_hidden: "true" }
                            span { class: "tab-title", "{tab.title}" }
                        }
                    }
                }
            }
        }
    }
}
