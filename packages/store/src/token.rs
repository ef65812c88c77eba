//! # Token store: where the bearer token lives between requests
//!
//! The access token issued by `POST /login` is written once, read before every
//! authorized call, and cleared on logout. A failed write is an error, so a
//! login never claims success without a saved token. There is no expiry
//! handling: a stale token is simply rejected by the server and the rejection
//! is surfaced to the user.
//!
//! Implementations live in sibling modules:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryTokenStore`] | tests | `Arc<Mutex<Option<String>>>` |
//! | [`crate::FileTokenStore`] | desktop | a single file under the platform data dir |
//! | `LocalStorageStore` | web (`web` feature) | `window.localStorage` |

/// Why a token could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("failed to write token file: {0}")]
    Io(#[from] std::io::Error),

    #[error("token storage is unavailable")]
    Unavailable,

    #[error("token storage refused the write")]
    Rejected,
}

/// Persistent slot for the session's bearer token.
pub trait TokenStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Forget the stored token.
    fn clear_token(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        (**self).set_token(token)
    }

    fn clear_token(&self) {
        (**self).clear_token()
    }
}
