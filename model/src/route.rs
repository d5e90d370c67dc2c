//! Route table shared by the browser router and CLI hints.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Top-level views of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
}

impl Route {
    /// Canonical path for navigation.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Home => "/homepage",
        }
    }

    /// Resolve a location path. `/` is the login view.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/homepage" => Some(Self::Home),
            _ => None,
        }
    }

    /// Whether the view needs a stored session token.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Home)
    }
}
