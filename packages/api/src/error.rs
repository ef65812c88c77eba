use thiserror::Error;

/// Everything that can go wrong talking to the Invite Service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// The server's `msg` field, when the error body carried one.
        message: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("failed to save login token: {0}")]
    TokenStore(#[from] store::TokenStoreError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Coarse failure classes.
///
/// The UI handles every class the same way; the split exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or transport failure, including a malformed response.
    Transport,
    /// Bad credentials or a missing/invalid token.
    Authentication,
    /// Missing fields, bad role and the like.
    Validation,
    /// The invite is gone or no longer in the state the view assumed.
    Conflict,
    /// Anything else the server refused.
    Server,
    /// The login token could not be saved on this device.
    Storage,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Http(_) | ApiError::Json(_) | ApiError::UrlParse(_) => ErrorKind::Transport,
            ApiError::Api { status, .. } => match status {
                401 | 403 => ErrorKind::Authentication,
                400 | 422 => ErrorKind::Validation,
                404 | 409 => ErrorKind::Conflict,
                _ => ErrorKind::Server,
            },
            ApiError::TokenStore(_) => ErrorKind::Storage,
        }
    }

    /// The server's own message if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message verbatim, else `fallback`.
    ///
    /// A token that could not be saved gets its own text, since the server
    /// accepted the credentials and a generic "Error" would suggest otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::TokenStore(_) => "Could not save your login on this device".to_string(),
            _ => self.server_message().unwrap_or(fallback).to_string(),
        }
    }
}
