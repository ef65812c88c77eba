use std::sync::{Arc, Mutex};

use crate::token::{TokenStore, TokenStoreError};

/// In-memory TokenStore for testing.
///
/// Clones share the same slot, so a test can hand one clone to a client and
/// inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut slot = self.token.lock().map_err(|_| TokenStoreError::Unavailable)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
