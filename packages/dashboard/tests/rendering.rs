//! Render the dashboard pieces to html and check what the user would see.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use scanforchange::components::StatsPanel;
use scanforchange::views::{Profile, Rank, Redeem, Scan};
use scanforchange_client::{DashboardError, FailureKind, ProfileEnvelope, UserProfile, ViewState};
use serde_json::json;

fn render_stats(state: ViewState) -> String {
    dioxus_ssr::render_element(rsx! {
        StatsPanel { state }
    })
}

fn profile(body: serde_json::Value) -> UserProfile {
    serde_json::from_value::<ProfileEnvelope>(body)
        .unwrap()
        .data
        .unwrap()
}

fn tile(label: &str, value: &str) -> String {
    format!(r#"<h2 class="stat-label">{label}</h2><span class="stat-value">{value}</span>"#)
}

#[test]
fn loading_shows_only_the_indicator() {
    let html = render_stats(ViewState::Loading);

    assert!(html.contains("Loading..."), "{html}");
    assert!(!html.contains("stat-tile"), "{html}");
    assert!(!html.contains("stats-error"), "{html}");
}

#[test]
fn missing_credential_replaces_the_tiles() {
    let html = render_stats(ViewState::Error(DashboardError::MissingCredential));

    assert!(html.contains("User not logged in"), "{html}");
    assert!(html.contains("stats-error"), "{html}");
    assert!(!html.contains("Loading..."), "{html}");
    assert!(!html.contains("stat-tile"), "{html}");
}

#[test]
fn fetch_failure_hides_the_cause() {
    let html = render_stats(ViewState::Error(DashboardError::FetchFailure(
        FailureKind::Status(401),
    )));

    assert!(html.contains("Failed to fetch user data."), "{html}");
    assert!(!html.contains("401"), "{html}");
}

#[test]
fn ready_renders_three_tiles() {
    let html = render_stats(ViewState::Ready(profile(json!({
        "data": { "points": 42, "reports": [{}, {}, {}], "rank": "Gold" }
    }))));

    assert!(html.contains(&tile("Earned Tokens", "42")), "{html}");
    assert!(html.contains(&tile("Scan Count", "3")), "{html}");
    assert!(html.contains(&tile("Rank", "Gold")), "{html}");
    assert_eq!(html.matches("stat-tile").count(), 3, "{html}");
    assert!(!html.contains("Loading..."), "{html}");
}

#[test]
fn ready_with_numeric_rank_and_no_reports() {
    let html = render_stats(ViewState::Ready(profile(json!({
        "data": { "points": 10, "rank": 3 }
    }))));

    assert!(html.contains(&tile("Earned Tokens", "10")), "{html}");
    assert!(html.contains(&tile("Scan Count", "0")), "{html}");
    assert!(html.contains(&tile("Rank", "3")), "{html}");
}

#[test]
fn tab_views_read_the_profile_they_are_given() {
    let ada = profile(json!({
        "data": {
            "points": 42,
            "reports": [{}, {}],
            "rank": "Gold",
            "name": "Ada",
            "email": "ada@example.com"
        }
    }));

    let html = dioxus_ssr::render_element(rsx! {
        Profile { profile: ada.clone() }
    });
    assert!(html.contains("Ada"), "{html}");
    assert!(html.contains("ada@example.com"), "{html}");

    let html = dioxus_ssr::render_element(rsx! {
        Scan { profile: ada.clone() }
    });
    assert!(html.contains("Scans so far: 2"), "{html}");

    let html = dioxus_ssr::render_element(rsx! {
        Redeem { profile: ada.clone() }
    });
    assert!(html.contains("Available balance: 42 tokens"), "{html}");

    let html = dioxus_ssr::render_element(rsx! {
        Rank { profile: ada }
    });
    assert!(html.contains("You are ranked Gold with 42 tokens."), "{html}");
}

#[test]
fn tab_views_render_without_a_profile() {
    let html = dioxus_ssr::render_element(rsx! {
        Profile {}
    });
    assert!(html.contains("Profile"), "{html}");
    assert!(!html.contains("Email"), "{html}");

    let html = dioxus_ssr::render_element(rsx! {
        Scan {}
    });
    assert!(!html.contains("Scans so far"), "{html}");
}
