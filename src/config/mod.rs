pub mod definitions;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Client runtime settings, built from defaults with environment overrides.
///
/// Constructed explicitly at process start and passed to the session and the
/// API client; there is no global config singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend origin. The `/api` prefix is appended by the client.
    pub base_url: String,
    /// Fixed per-request timeout. A timed-out request surfaces as a plain
    /// transport error.
    pub timeout_secs: u64,
    /// Directory holding the persisted session entries.
    pub state_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            state_dir: default_state_dir(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("LITEA_BASE_URL") {
            self.base_url = v;
        }
        if let Ok(v) = env::var("LITEA_TIMEOUT_SECS") {
            self.timeout_secs = v.parse().unwrap_or(self.timeout_secs);
        }
        if let Ok(v) = env::var("LITEA_STATE_DIR") {
            self.state_dir = PathBuf::from(v);
        }
        self
    }
}

fn default_state_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".config").join("litea").join("client"),
        Err(_) => PathBuf::from(".litea"),
    }
}
