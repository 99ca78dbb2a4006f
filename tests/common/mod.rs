use std::sync::Arc;

use anyhow::Result;
use litea_client::client::ApiClient;
use litea_client::config::Settings;
use litea_client::session::{AuthService, Session};

/// Mock backend plus a client wired to it through a throwaway state
/// directory.
pub struct TestEnv {
    pub server: mockito::ServerGuard,
    pub client: ApiClient,
    pub session: Arc<Session>,
    // Holds the state directory alive for the duration of the test.
    _state_dir: tempfile::TempDir,
}

impl TestEnv {
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone(), self.session.clone())
    }
}

// Honors RUST_LOG; repeated calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn env() -> Result<TestEnv> {
    init_tracing();
    let server = mockito::Server::new_async().await;
    let state_dir = tempfile::tempdir()?;
    let settings = Settings {
        base_url: server.url(),
        timeout_secs: 5,
        state_dir: state_dir.path().to_path_buf(),
    };
    let session = Arc::new(Session::open(&settings.state_dir)?);
    let client = ApiClient::new(&settings, session.clone())?;
    Ok(TestEnv { server, client, session, _state_dir: state_dir })
}

/// A task payload as the backend serializes it.
pub fn task_json(id: i64, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "prompt": "recent advances in retrieval",
        "keywords": [{"keyword": "retrieval", "is_user_defined": true}],
        "sources": [{"source_name": "arxiv", "parameters": {}}],
        "run_at_hour": 8,
        "run_at_minute": 0,
        "run_timezone": "Asia/Shanghai",
        "notification": {"channel": "email", "recipients": []},
        "status": status,
        "created_at": "2024-05-01T00:00:00Z",
        "updated_at": "2024-05-01T00:00:00Z",
        "last_run_at": null,
        "next_run_at": null
    })
}

/// A document payload as the backend serializes it.
pub fn document_json(id: i64, task_id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "task_id": task_id,
        "run_id": 1,
        "source_name": "arxiv",
        "external_id": format!("2401.{id:05}"),
        "title": title,
        "authors": ["A. Author"],
        "abstract": "An abstract.",
        "url": "https://example.org/paper",
        "pdf_url": null,
        "published_at": "2024-04-30T00:00:00Z",
        "keywords": ["retrieval"],
        "user_keywords": [],
        "is_filtered_in": true,
        "rank_score": 0.9,
        "zotero_key": null,
        "summary": null,
        "created_at": "2024-05-01T00:00:00Z"
    })
}
