//! The fixed set of sidebar tabs.

use crate::Route;

/// An icon from the dashboard's icon font. Rendering is left to the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    LayoutPanelLeft,
    QrCode,
    Coins,
    User,
    Award,
    LogOut,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::LayoutPanelLeft => "icon icon-layout-panel-left",
            Icon::QrCode => "icon icon-qr-code",
            Icon::Coins => "icon icon-coins",
            Icon::User => "icon icon-user",
            Icon::Award => "icon icon-award",
            Icon::LogOut => "icon icon-log-out",
        }
    }
}

/// One sidebar entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NavTab {
    pub id: u8,
    pub route: Route,
    pub title: &'static str,
    pub icon: Icon,
}

impl NavTab {
    /// Highlighted only when the current route is exactly this tab's route.
    ///
    /// Deeper routes under `/dashboard` don't light up the Dashboard tab.
    pub fn is_active(&self, current: &Route) -> bool {
        self.route == *current
    }

    pub fn link_class(&self, current: &Route) -> &'static str {
        match self.is_active(current) {
            true => "nav-link active",
            false => "nav-link",
        }
    }
}

pub static TABS: [NavTab; 5] = [
    NavTab {
        id: 1,
        route: Route::Dashboard {},
        title: "Dashboard",
        icon: Icon::LayoutPanelLeft,
    },
    NavTab {
        id: 2,
        route: Route::Scan {},
        title: "Scan",
        icon: Icon::QrCode,
    },
    NavTab {
        id: 3,
        route: Route::Redeem {},
        title: "Redeem",
        icon: Icon::Coins,
    },
    NavTab {
        id: 4,
        route: Route::Profile {},
        title: "Profile",
        icon: Icon::User,
    },
    NavTab {
        id: 5,
        route: Route::Rank {},
        title: "Rank",
        icon: Icon::Award,
    },
];
