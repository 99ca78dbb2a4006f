mod service;
mod store;

pub use service::{AuthService, LoginResponse};
pub use store::{SessionStore, AUTH_REQUIRED_KEY, TOKEN_KEY, USERNAME_KEY};

use std::path::Path;
use std::sync::Mutex;

use crate::error::ClientError;

/// Whether the backend requires authentication at all.
///
/// `Unknown` means the capability has never been probed this session and a
/// query is required; it is distinct from a probed `NotRequired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    Unknown,
    Required,
    NotRequired,
}

impl AuthRequirement {
    fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("true") => AuthRequirement::Required,
            Some("false") => AuthRequirement::NotRequired,
            _ => AuthRequirement::Unknown,
        }
    }
}

/// Session context: persisted credentials plus the in-memory cache of the
/// backend's auth requirement.
///
/// Constructed once at process start and shared (behind an `Arc`) by the API
/// client, the auth service, and the navigation guard. There is no implicit
/// global instance.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    auth_required: Mutex<AuthRequirement>,
}

impl Session {
    /// Opens the session state directory. A persisted auth-requirement flag
    /// seeds the in-memory cache so a reload does not re-probe the backend;
    /// a persisted token is left in place for per-request attachment.
    pub fn open(state_dir: impl AsRef<Path>) -> Result<Self, ClientError> {
        let store = SessionStore::open(state_dir.as_ref())?;
        let seeded = AuthRequirement::from_persisted(store.get(AUTH_REQUIRED_KEY).as_deref());
        Ok(Self { store, auth_required: Mutex::new(seeded) })
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(USERNAME_KEY)
    }

    /// Token presence is the authentication signal; no network involved.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn set_credentials(&self, token: &str, username: &str) -> Result<(), ClientError> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USERNAME_KEY, username)
    }

    pub(crate) fn clear_credentials(&self) -> Result<(), ClientError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USERNAME_KEY)
    }

    /// Current in-memory view of the auth requirement.
    pub fn auth_requirement(&self) -> AuthRequirement {
        *self.auth_required.lock().unwrap()
    }

    /// Resolves the tri-state, both in memory and in durable storage.
    pub(crate) fn cache_auth_requirement(&self, required: bool) -> Result<(), ClientError> {
        *self.auth_required.lock().unwrap() = if required {
            AuthRequirement::Required
        } else {
            AuthRequirement::NotRequired
        };
        self.store.set(AUTH_REQUIRED_KEY, if required { "true" } else { "false" })
    }
}
