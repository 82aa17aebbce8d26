use dioxus::prelude::*;
use scanforchange_client::{load_view_state, UserProfile};

use super::{Header, Sidebar, StatsPanel};
use crate::views::{Dashboard, Profile, Rank, Redeem, Scan};
use crate::{Route, Services};

/// Shell around every `/dashboard` route.
///
/// The profile is requested once when the layout mounts. The request runs as a task owned by this
/// component, so it is dropped with the component and a late response can never land in a stale
/// view. Switching tabs keeps the layout mounted and doesn't refetch.
///
/// Tab views get the profile as a prop instead of looking it up from context.
#[component]
pub fn DashboardLayout() -> Element {
    let services = use_context::<Services>();
    let current = use_route::<Route>();

    let profile_load = use_resource(move || {
        let services = services.clone();
        async move { load_view_state(&*services.store, &services.client).await }
    });

    // `None` until the load settles
    let state = profile_load.cloned().unwrap_or_default();
    let profile = state.profile().cloned();

    rsx! {
        div { class: "dashboard",
            Header {}
            div { class: "dashboard-body",
                Sidebar { current: current.clone() }
                main { class: "dashboard-main",
                    StatsPanel { state }
                    TabContent { route: current, profile }
                }
            }
        }
    }
}

#[component]
fn TabContent(route: Route, profile: Option<UserProfile>) -> Element {
    match route {
        Route::Dashboard {} => rsx! { Dashboard { profile } },
        Route::Scan {} => rsx! { Scan { profile } },
        Route::Redeem {} => rsx! { Redeem { profile } },
        Route::Profile {} => rsx! { Profile { profile } },
        Route::Rank {} => rsx! { Rank { profile } },
        Route::Login {} | Route::NotFound { .. } => rsx! {},
    }
}
