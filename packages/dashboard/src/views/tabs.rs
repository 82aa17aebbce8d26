use dioxus::prelude::*;
use scanforchange_client::UserProfile;

#[component]
pub fn Dashboard(#[props(default)] profile: Option<UserProfile>) -> Element {
    let greeting = match profile.as_ref().and_then(|p| p.text_field("name")) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_string(),
    };

    rsx! {
        section { class: "tab tab-overview",
            h3 { "{greeting}" }
            p { "Scan recyclables to earn tokens, then redeem them for rewards." }
        }
    }
}

#[component]
pub fn Scan(#[props(default)] profile: Option<UserProfile>) -> Element {
    let scans = profile.as_ref().map(UserProfile::scan_count);

    rsx! {
        section { class: "tab tab-scan",
            h3 { "Scan" }
            p { "Point your camera at a ScanForChange QR code to log a scan." }
            if let Some(scans) = scans {
                p { class: "tab-detail", "Scans so far: {scans}" }
            }
        }
    }
}

#[component]
pub fn Redeem(#[props(default)] profile: Option<UserProfile>) -> Element {
    rsx! {
        section { class: "tab tab-redeem",
            h3 { "Redeem" }
            if let Some(profile) = profile {
                p { class: "tab-detail", "Available balance: {profile.points} tokens" }
            }
        }
    }
}

#[component]
pub fn Profile(#[props(default)] profile: Option<UserProfile>) -> Element {
    let Some(profile) = profile else {
        return rsx! {
            section { class: "tab tab-profile", h3 { "Profile" } }
        };
    };

    let name = profile.text_field("name").unwrap_or("-").to_string();
    let email = profile.text_field("email").unwrap_or("-").to_string();

    rsx! {
        section { class: "tab tab-profile",
            h3 { "Profile" }
            dl {
                dt { "Name" }
                dd { "{name}" }
                dt { "Email" }
                dd { "{email}" }
            }
        }
    }
}

#[component]
pub fn Rank(#[props(default)] profile: Option<UserProfile>) -> Element {
    rsx! {
        section { class: "tab tab-rank",
            h3 { "Rank" }
            if let Some(profile) = profile {
                p { class: "tab-detail", "You are ranked {profile.rank} with {profile.points} tokens." }
            }
        }
    }
}
