use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{AuthRequirement, Session};
use crate::client::ApiClient;
use crate::error::ClientError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Payload returned by `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    valid: bool,
}

#[derive(Debug, Deserialize)]
struct AuthStatus {
    auth_enabled: bool,
}

/// Session and authentication operations.
///
/// Owns a client handle and the shared session context; cheap to clone, so
/// the navigation guard and any callers can hold their own copy.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    session: Arc<Session>,
}

impl AuthService {
    pub fn new(client: ApiClient, session: Arc<Session>) -> Self {
        Self { client, session }
    }

    /// Sends credentials to the backend and persists the returned token and
    /// username. Failures (401 included) propagate to the caller; no retry.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response: LoginResponse = self
            .client
            .post("auth/login", &LoginRequest { username, password })
            .await?;
        self.session.set_credentials(&response.access_token, &response.username)?;
        tracing::info!(username = %response.username, "logged in");
        Ok(response)
    }

    /// Clears persisted credentials. Local only, no network call.
    pub fn logout(&self) -> Result<(), ClientError> {
        tracing::info!("logged out");
        self.session.clear_credentials()
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn username(&self) -> Option<String> {
        self.session.username()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Asks the backend whether the current token is still valid. Collapses
    /// every failure mode, invalid token and transport error alike, to
    /// `false`.
    pub async fn verify(&self) -> bool {
        match self.client.get::<VerifyResponse>("auth/verify").await {
            Ok(body) => body.valid,
            Err(_) => false,
        }
    }

    /// Whether the backend requires authentication at all.
    ///
    /// The result is cached in memory and in the session store, so repeated
    /// calls (one per navigation) issue at most one probe per session. A
    /// failed probe assumes auth is required and leaves the cache unset, so
    /// a later successful probe can still resolve it.
    pub async fn check_auth_enabled(&self) -> bool {
        match self.session.auth_requirement() {
            AuthRequirement::Required => true,
            AuthRequirement::NotRequired => false,
            AuthRequirement::Unknown => match self.client.get::<AuthStatus>("auth/status").await {
                Ok(status) => {
                    if let Err(e) = self.session.cache_auth_requirement(status.auth_enabled) {
                        tracing::warn!(error = %e, "failed to persist auth capability flag");
                    }
                    status.auth_enabled
                }
                Err(e) => {
                    tracing::warn!(error = %e, "auth capability probe failed, assuming auth is required");
                    true
                }
            },
        }
    }

    /// The navigation guard's sole gating input: `false` outright when the
    /// backend has auth disabled, token presence otherwise.
    pub async fn needs_login(&self) -> bool {
        if !self.check_auth_enabled().await {
            return false;
        }
        !self.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    struct Harness {
        server: mockito::ServerGuard,
        auth: AuthService,
        session: Arc<Session>,
        _state_dir: tempfile::TempDir,
    }

    async fn harness() -> Harness {
        let server = mockito::Server::new_async().await;
        let state_dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            base_url: server.url(),
            timeout_secs: 5,
            state_dir: state_dir.path().to_path_buf(),
        };
        let session = Arc::new(Session::open(&settings.state_dir).unwrap());
        let client = ApiClient::new(&settings, session.clone()).unwrap();
        let auth = AuthService::new(client, session.clone());
        Harness { server, auth, session, _state_dir: state_dir }
    }

    #[tokio::test]
    async fn login_persists_token_and_username() {
        let mut h = harness().await;
        let mock = h
            .server
            .mock("POST", "/api/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "alice",
                "password": "x"
            })))
            .with_status(200)
            .with_body(r#"{"access_token": "tok-1", "token_type": "bearer", "username": "alice"}"#)
            .create_async()
            .await;

        let response = h.auth.login("alice", "x").await.unwrap();
        assert_eq!(response.access_token, "tok-1");
        assert!(h.auth.is_authenticated());
        assert_eq!(h.auth.username(), Some("alice".to_string()));
        assert_eq!(h.session.token(), Some("tok-1".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failed_login_propagates_server_message() {
        let mut h = harness().await;
        h.server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"error": "invalid username or password"}"#)
            .create_async()
            .await;

        let err = h.auth.login("alice", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("invalid username or password"));
        assert!(!h.auth.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_credentials() {
        let h = harness().await;
        h.session.set_credentials("tok-1", "alice").unwrap();

        h.auth.logout().unwrap();
        assert!(!h.auth.is_authenticated());
        assert_eq!(h.auth.token(), None);
        assert_eq!(h.auth.username(), None);
    }

    #[tokio::test]
    async fn verify_collapses_failures_to_false() {
        let mut h = harness().await;
        let mock = h
            .server
            .mock("GET", "/api/auth/verify")
            .with_status(401)
            .with_body(r#"{"error": "token invalid or expired"}"#)
            .create_async()
            .await;
        assert!(!h.auth.verify().await);
        mock.remove_async().await;

        h.server
            .mock("GET", "/api/auth/verify")
            .with_status(200)
            .with_body(r#"{"valid": true, "username": "alice"}"#)
            .create_async()
            .await;
        assert!(h.auth.verify().await);
    }

    #[tokio::test]
    async fn check_auth_enabled_probes_once_per_session() {
        let mut h = harness().await;
        let mock = h
            .server
            .mock("GET", "/api/auth/status")
            .with_status(200)
            .with_body(r#"{"auth_enabled": true}"#)
            .expect(1)
            .create_async()
            .await;

        assert!(h.auth.check_auth_enabled().await);
        assert!(h.auth.check_auth_enabled().await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failed_probe_fails_closed_without_caching() {
        let mut h = harness().await;
        let failing = h
            .server
            .mock("GET", "/api/auth/status")
            .with_status(500)
            .with_body(r#"{"error": "boom"}"#)
            .create_async()
            .await;

        assert!(h.auth.check_auth_enabled().await);
        assert_eq!(h.session.auth_requirement(), AuthRequirement::Unknown);
        failing.remove_async().await;

        // A later successful probe overrides the assumed default.
        h.server
            .mock("GET", "/api/auth/status")
            .with_status(200)
            .with_body(r#"{"auth_enabled": false}"#)
            .create_async()
            .await;
        assert!(!h.auth.check_auth_enabled().await);
        assert_eq!(h.session.auth_requirement(), AuthRequirement::NotRequired);
    }

    #[tokio::test]
    async fn needs_login_is_false_when_auth_disabled_even_without_token() {
        let mut h = harness().await;
        h.server
            .mock("GET", "/api/auth/status")
            .with_status(200)
            .with_body(r#"{"auth_enabled": false}"#)
            .create_async()
            .await;

        assert!(!h.auth.is_authenticated());
        assert!(!h.auth.needs_login().await);
    }

    #[tokio::test]
    async fn needs_login_tracks_token_presence_when_auth_enabled() {
        let mut h = harness().await;
        h.server
            .mock("GET", "/api/auth/status")
            .with_status(200)
            .with_body(r#"{"auth_enabled": true}"#)
            .create_async()
            .await;

        assert!(h.auth.needs_login().await);

        // Token presence flips the predicate; no verification is attempted.
        h.session.set_credentials("tok-1", "alice").unwrap();
        assert!(!h.auth.needs_login().await);
    }
}
