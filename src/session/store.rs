use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::ClientError;

pub const TOKEN_KEY: &str = "auth_token";
pub const USERNAME_KEY: &str = "username";
pub const AUTH_REQUIRED_KEY: &str = "auth_required";

/// Durable keyed string entries backing the session.
///
/// Each key maps to one file under the state directory; there is no schema
/// versioning. Concurrent writers from other processes are not reconciled,
/// last write wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    /// Returns the stored value, or `None` when unset or empty.
    pub fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        fs::write(self.dir.join(key), value)?;
        Ok(())
    }

    /// Removes the entry; removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), ClientError> {
        match fs::remove_file(self.dir.join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
