//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by the app root so the navigation shell reads identity
//! without owning it. Authentication itself is not implemented; whatever
//! collaborator eventually signs users in only has to update this signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// A navigation target rendered as an icon link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SEARCH_LINK: NavLink = NavLink { href: "/search", label: "Search", icon: "🔍" };
pub const REPORT_LINK: NavLink = NavLink { href: "/report", label: "Report a pet", icon: "➕" };
pub const PROFILE_LINK: NavLink = NavLink { href: "/profile", label: "Profile", icon: "👤" };
pub const LOGIN_LINK: NavLink = NavLink { href: "/login", label: "Log in", icon: "↪" };

/// Authentication state. Defaults to signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Profile for signed-in users, login otherwise.
    #[must_use]
    pub fn account_link(&self) -> NavLink {
        if self.authenticated { PROFILE_LINK } else { LOGIN_LINK }
    }

    /// Icon links shown on the right side of the navbar, in order.
    #[must_use]
    pub fn nav_links(&self) -> [NavLink; 3] {
        [SEARCH_LINK, REPORT_LINK, self.account_link()]
    }
}
