use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Settings;
use crate::error::ClientError;
use crate::session::Session;

/// HTTP wrapper for the backend's `/api` prefix.
///
/// One configured `reqwest::Client` with a fixed request timeout. The bearer
/// token is read from the session and attached per request at send time;
/// there is no ambient default header. Non-2xx responses are mapped to
/// [`ClientError::Api`], logged, and returned to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(settings: &Settings, session: Arc<Session>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        let base = Url::parse(&format!("{}/api/", settings.base_url.trim_end_matches('/')))
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", settings.base_url, e)))?;
        Ok(Self { http, base, session })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        Ok(response.json().await?)
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(self.request(Method::GET, path)?.query(query)).await?;
        Ok(response.json().await?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(self.request(Method::POST, path)?.json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST without a request body (task lifecycle endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::POST, path)?).await?;
        Ok(response.json().await?)
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(self.request(Method::PUT, path)?.json(body)).await?;
        Ok(response.json().await?)
    }

    /// DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, path)?).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid endpoint path {:?}: {}", path, e)))?;
        tracing::debug!(method = %method, url = %url, "sending API request");
        let builder = self.http.request(method, url);
        // Credentials attach per request, read from the session at send time.
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "request failed before a response was received");
            ClientError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = extract_error_message(response)
            .await
            .unwrap_or_else(|| default_message(status));
        tracing::error!(status = status.as_u16(), message = %message, "API request failed");
        Err(ClientError::Api { status: status.as_u16(), message })
    }
}

/// Pulls the `error` field out of a structured error body, if there is one.
/// Validation errors arrive as arrays; those are rendered as JSON text.
async fn extract_error_message(response: Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    match body.get("error")? {
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn default_message(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("request failed").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> (tempfile::TempDir, ApiClient) {
        let state_dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            state_dir: state_dir.path().to_path_buf(),
        };
        let session = Arc::new(Session::open(&settings.state_dir).unwrap());
        let client = ApiClient::new(&settings, session).unwrap();
        (state_dir, client)
    }

    #[test]
    fn rejects_invalid_base_url() {
        let state_dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
            state_dir: state_dir.path().to_path_buf(),
        };
        let session = Arc::new(Session::open(&settings.state_dir).unwrap());
        assert!(matches!(
            ApiClient::new(&settings, session),
            Err(ClientError::Config(_))
        ));
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() {
        let mut server = mockito::Server::new_async().await;
        let (_state, client) = client_for(&server.url());
        client.session().set_credentials("tok-9", "alice").unwrap();

        let mock = server
            .mock("GET", "/api/sources")
            .match_header("authorization", "Bearer tok-9")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let _: serde_json::Value = client.get("sources").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn omits_authorization_header_without_token() {
        let mut server = mockito::Server::new_async().await;
        let (_state, client) = client_for(&server.url());

        let mock = server
            .mock("GET", "/api/sources")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let _: serde_json::Value = client.get("sources").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn surfaces_structured_error_bodies() {
        let mut server = mockito::Server::new_async().await;
        let (_state, client) = client_for(&server.url());

        server
            .mock("GET", "/api/tasks/1")
            .with_status(404)
            .with_body(r#"{"error": "task not found"}"#)
            .create_async()
            .await;

        let err = client.get::<serde_json::Value>("tasks/1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("task not found"));
    }

    #[tokio::test]
    async fn falls_back_to_status_reason_without_error_body() {
        let mut server = mockito::Server::new_async().await;
        let (_state, client) = client_for(&server.url());

        server
            .mock("GET", "/api/tasks")
            .with_status(502)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let err = client.get::<serde_json::Value>("tasks").await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.server_message(), Some("Bad Gateway"));
    }
}
