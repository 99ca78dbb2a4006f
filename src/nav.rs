//! Pre-navigation authentication gate.

use crate::session::AuthService;

pub const LOGIN_ROUTE: &str = "login";
pub const DEFAULT_ROUTE: &str = "home";

/// A navigation target. Routes require authentication unless they opt out.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub requires_auth: bool,
}

impl Route {
    pub fn new(name: impl Into<String>, requires_auth: bool) -> Self {
        Self { name: name.into(), requires_auth }
    }

    pub fn login() -> Self {
        Self::new(LOGIN_ROUTE, false)
    }

    pub fn home() -> Self {
        Self::new(DEFAULT_ROUTE, true)
    }
}

/// Outcome of a navigation attempt. The guard always resolves to exactly one
/// of these; a stuck probe is absorbed by the fail-closed capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

/// Runs before each navigation, consulting only the auth service.
#[derive(Clone)]
pub struct Guard {
    auth: AuthService,
}

impl Guard {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    pub async fn before_each(&self, to: &Route) -> Decision {
        let needs_login = self.auth.needs_login().await;
        if to.requires_auth && needs_login {
            Decision::RedirectToLogin
        } else if to.name == LOGIN_ROUTE && !needs_login {
            Decision::RedirectToHome
        } else {
            Decision::Proceed
        }
    }
}
