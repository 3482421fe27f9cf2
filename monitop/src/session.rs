//! Session store: one bearer token persisted as plain text.
//!
//! Lives next to the connection profiles under the monitop config dir, under
//! the fixed name `monitor_token`. No expiry is tracked here; a stale token
//! surfaces as a 401 on the next poll.

use std::{fs, io, path::PathBuf};

use crate::profiles::config_dir;

pub const TOKEN_FILE: &str = "monitor_token";

pub fn token_path() -> PathBuf {
    config_dir().join(TOKEN_FILE)
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { path: token_path() }
    }

    /// Back the store with an explicit file (tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any. An empty or unreadable file counts
    /// as logged out.
    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Remove the token. Idempotent: clearing an absent token succeeds.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
