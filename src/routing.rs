//! Route guards
//!
//! Every data page lives under a user scope (`/users/{id}/...`). Guards run
//! before navigation: an anonymous visitor is sent to the login page, and a
//! signed-in user asking for someone else's scope is sent to the same page
//! under their own scope. Guards only decide; they never fetch.

use std::fmt;
use std::str::FromStr;

use crate::gateway::Session;

/// The pages reachable under a user scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Transactions,
    Categories,
    Reports,
    Settings,
}

impl Page {
    /// Trailing path segment for this page
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Transactions => "transactions",
            Self::Categories => "categories",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "transactions" => Ok(Self::Transactions),
            "categories" => Ok(Self::Categories),
            "reports" => Ok(Self::Reports),
            "settings" => Ok(Self::Settings),
            other => Err(format!("unknown page: {}", other)),
        }
    }
}

/// A navigation target before guards have run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The login page, outside any user scope
    Login,
    /// A page under a specific user's scope
    Scoped { user_id: String, page: Page },
}

impl Route {
    /// Build the scoped route for a page under a user
    pub fn scoped(user_id: impl Into<String>, page: Page) -> Self {
        Self::Scoped {
            user_id: user_id.into(),
            page,
        }
    }

    /// Parse a path like `/users/alice/dashboard` or `/login`
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Some(Self::Login),
            ["users", user_id] => Some(Self::scoped(*user_id, Page::Dashboard)),
            ["users", user_id, page] => {
                let page = page.parse().ok()?;
                Some(Self::scoped(*user_id, page))
            }
            _ => None,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Scoped { user_id, page } => {
                format!("/users/{}/{}", user_id, page.segment())
            }
        }
    }
}

/// Outcome of running the guards against a requested route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation may proceed as requested
    Proceed(Route),
    /// Somebody else's scope was requested; go to the same page in our own
    Redirect(Route),
}

/// Decide whether a requested route may be entered by the current session
pub fn guard(requested: &Route, session: &Session) -> RouteDecision {
    match (requested, session.user_id()) {
        // Anonymous visitors only get the login page
        (_, None) => {
            if *requested == Route::Login {
                RouteDecision::Proceed(Route::Login)
            } else {
                RouteDecision::Redirect(Route::Login)
            }
        }
        // Signed-in users have no business on the login page
        (Route::Login, Some(own_id)) => {
            RouteDecision::Redirect(Route::scoped(own_id, Page::Dashboard))
        }
        (Route::Scoped { user_id, page }, Some(own_id)) => {
            if user_id == own_id {
                RouteDecision::Proceed(requested.clone())
            } else {
                RouteDecision::Redirect(Route::scoped(own_id, *page))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_path_round() {
        let route = Route::parse("/users/alice/transactions").unwrap();
        assert_eq!(route, Route::scoped("alice", Page::Transactions));
        assert_eq!(route.path(), "/users/alice/transactions");

        assert_eq!(Route::parse("/login"), Some(Route::Login));
        // Bare user scope defaults to the dashboard
        assert_eq!(
            Route::parse("/users/alice"),
            Some(Route::scoped("alice", Page::Dashboard))
        );
        assert_eq!(Route::parse("/users/alice/nope"), None);
        assert_eq!(Route::parse("/"), None);
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        let session = Session::anonymous();
        let requested = Route::scoped("alice", Page::Reports);

        assert_eq!(
            guard(&requested, &session),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            guard(&Route::Login, &session),
            RouteDecision::Proceed(Route::Login)
        );
    }

    #[test]
    fn test_own_scope_proceeds() {
        let session = Session::authenticated("alice");
        let requested = Route::scoped("alice", Page::Categories);

        assert_eq!(
            guard(&requested, &session),
            RouteDecision::Proceed(requested.clone())
        );
    }

    #[test]
    fn test_foreign_scope_redirects_to_own() {
        let session = Session::authenticated("alice");
        let requested = Route::scoped("bob", Page::Reports);

        assert_eq!(
            guard(&requested, &session),
            RouteDecision::Redirect(Route::scoped("alice", Page::Reports))
        );
    }

    #[test]
    fn test_signed_in_login_goes_to_dashboard() {
        let session = Session::authenticated("alice");

        assert_eq!(
            guard(&Route::Login, &session),
            RouteDecision::Redirect(Route::scoped("alice", Page::Dashboard))
        );
    }
}
