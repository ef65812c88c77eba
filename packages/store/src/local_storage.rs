//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. It
//! keeps the token under a single key (default `"access_token"`) in
//! `window.localStorage`, so it survives page reloads while the rest of the
//! session state does not.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled by policy). Reads
//! and clears degrade to "no token"; a failed write is returned to the caller
//! so login can report it.

use web_sys::Storage;

use crate::token::{TokenStore, TokenStoreError};

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let storage = Self::storage().ok_or(TokenStoreError::Unavailable)?;
        storage
            .set_item(&self.key, token)
            .map_err(|_| TokenStoreError::Rejected)
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
