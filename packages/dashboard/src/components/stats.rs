use dioxus::prelude::*;
use scanforchange_client::ViewState;

/// The three stat tiles, or whatever stands in for them while loading or after a failure.
#[component]
pub fn StatsPanel(state: ViewState) -> Element {
    rsx! {
        div { class: "stats",
            match state {
                ViewState::Loading => rsx! {
                    span { class: "stats-status", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    span { class: "stats-status stats-error", "{err}" }
                },
                ViewState::Ready(profile) => rsx! {
                    StatTile { label: "Earned Tokens", value: profile.points.to_string() }
                    StatTile { label: "Scan Count", value: profile.scan_count().to_string() }
                    StatTile { label: "Rank", value: profile.rank.to_string() }
                },
            }
        }
    }
}

#[component]
pub fn StatTile(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            h2 { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}
