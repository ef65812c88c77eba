//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file so the desktop app
//! reuses it across restarts, the way the browser keeps it in `localStorage`.
//!
//! ## Platform data directories
//!
//! Callers normally place the file under `dirs::data_dir()`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/eventide/access_token` |
//! | Linux | `~/.local/share/eventide/access_token` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\eventide\access_token` |
//!
//! An unreadable file reads as "no token" and the server's rejection tells the
//! user to log in again. Write failures are returned from
//! [`TokenStore::set_token`].

use std::path::{Path, PathBuf};

use crate::token::{TokenStore, TokenStoreError};

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear_token(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
