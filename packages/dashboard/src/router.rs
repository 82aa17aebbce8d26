use dioxus::prelude::*;

use crate::components::DashboardLayout;
use crate::views::{Dashboard, Login, NotFound, Profile, Rank, Redeem, Scan};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/scan")]
        Scan {},
        #[route("/dashboard/redeem")]
        Redeem {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/rank")]
        Rank {},
    #[end_layout]

    #[route("/login")]
    Login {},

    #[redirect("/", || Route::Dashboard {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let expected = [
            (Route::Dashboard {}, "/dashboard"),
            (Route::Scan {}, "/dashboard/scan"),
            (Route::Redeem {}, "/dashboard/redeem"),
            (Route::Profile {}, "/dashboard/profile"),
            (Route::Rank {}, "/dashboard/rank"),
            (Route::Login {}, "/login"),
        ];

        for (route, path) in expected {
            assert_eq!(route.to_string(), path);
            assert_eq!(path.parse::<Route>().ok(), Some(route));
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(
            "/dashboard/settings".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["dashboard".to_string(), "settings".to_string()]
            })
        );
    }
}
