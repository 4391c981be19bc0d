//! Navigation shell wrapping every dashboard page.

use std::fmt;
use std::str::FromStr;

use crate::session::SessionContext;

/// Dashboard routes, in sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    IpAssets,
    LegalCases,
    Documents,
    Alerts,
    Analytics,
    Team,
    Settings,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::IpAssets,
        Route::LegalCases,
        Route::Documents,
        Route::Alerts,
        Route::Analytics,
        Route::Team,
        Route::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::IpAssets => "IP Assets",
            Route::LegalCases => "Legal Cases",
            Route::Documents => "Documents",
            Route::Alerts => "Misinformation Alerts",
            Route::Analytics => "Analytics",
            Route::Team => "Team",
            Route::Settings => "Settings",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::IpAssets => "/ip-assets",
            Route::LegalCases => "/legal-cases",
            Route::Documents => "/documents",
            Route::Alerts => "/alerts",
            Route::Analytics => "/analytics",
            Route::Team => "/team",
            Route::Settings => "/settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

impl FromStr for Route {
    type Err = String;

    /// Accepts the href with or without the leading slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = format!("/{}", s.trim().trim_start_matches('/'));
        Route::ALL
            .into_iter()
            .find(|r| r.href() == path)
            .ok_or_else(|| format!("unknown route: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Sidebar state for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub links: Vec<NavLink>,
    pub user_email: Option<String>,
    pub current: Route,
}

impl Layout {
    pub fn build(current: Route, session: &SessionContext) -> Self {
        Self {
            links: Route::ALL
                .into_iter()
                .map(|route| NavLink {
                    name: route.name(),
                    href: route.href(),
                    active: route == current,
                })
                .collect(),
            user_email: session.email(),
            current,
        }
    }
}
