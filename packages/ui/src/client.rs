//! Shared client constructor for all platforms.
//!
//! Returns an [`api::EventideClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a token file via [`store::FileTokenStore`]
//!
//! The platform entry point calls [`configure`] once at startup. Views that
//! run before that (or in tests) get the default configuration. A base URL
//! that does not parse surfaces as an [`ApiError`] from [`make_client`], the
//! same way a failed request would.

use std::sync::OnceLock;
use std::time::Duration;

use api::{parse_base_url, ApiError, EventideClient};
use store::EventideConfig;
use url::Url;

static SETTINGS: OnceLock<ClientSettings> = OnceLock::new();

#[derive(Debug, Clone)]
struct ClientSettings {
    http: reqwest::Client,
    base_url: Url,
    token_key: String,
    signup_delay: Duration,
}

impl ClientSettings {
    fn from_config(config: &EventideConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parse_base_url(&config.api.base_url)?,
            token_key: config.session.token_key.clone(),
            signup_delay: Duration::from_millis(config.signup.redirect_delay_ms),
        })
    }
}

fn settings() -> Result<&'static ClientSettings, ApiError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }
    let defaults = ClientSettings::from_config(&EventideConfig::default())?;
    Ok(SETTINGS.get_or_init(|| defaults))
}

/// Install `config` for every client created afterwards.
///
/// Only the first call has any effect; later calls are logged and ignored.
pub fn configure(config: &EventideConfig) -> Result<(), ApiError> {
    let settings = ClientSettings::from_config(config)?;
    tracing::info!(base_url = %settings.base_url, "configured Invite Service client");
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("client already configured, ignoring new settings");
    }
    Ok(())
}

/// Create a client for the configured Invite Service with the platform's token store.
pub fn make_client() -> Result<EventideClient<impl store::TokenStore>, ApiError> {
    let settings = settings()?;
    Ok(EventideClient::with_http(
        settings.http.clone(),
        settings.base_url.clone(),
        token_store(&settings.token_key),
    ))
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn token_store(key: &str) -> store::LocalStorageStore {
    store::LocalStorageStore::new(key)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn token_store(key: &str) -> store::FileTokenStore {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("eventide");
    store::FileTokenStore::new(dir.join(key))
}

/// How long the signup view waits before moving on to login.
pub fn signup_delay() -> Duration {
    match settings() {
        Ok(settings) => settings.signup_delay,
        Err(_) => Duration::from_millis(EventideConfig::default().signup.redirect_delay_ms),
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
