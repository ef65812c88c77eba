//! # REST client for the Invite Service
//!
//! [`EventideClient`] wraps a `reqwest::Client`, the service's base URL and a
//! [`TokenStore`]. Every endpoint the dashboards need is one method here; the
//! client never retries and never times out on its own.
//!
//! Authorized calls read the token from the store on every request, so a
//! login in one place is visible to all clients sharing the store. Non-2xx
//! responses become [`ApiError::Api`] carrying the server's `msg` field.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::TokenStore;
use tracing::instrument;
use url::Url;

use crate::error::{ApiError, Result};
use crate::lifecycle::GuestAction;
use crate::models::{
    Invite, InviteFields, LoginRequest, LoginResponse, MessageResponse, Profile, Role,
    SignupRequest,
};

/// Error body shape shared by every endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "message")]
    msg: Option<String>,
}

/// Validate a configured base URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    Ok(Url::parse(raw.trim())?)
}

pub struct EventideClient<S> {
    http: Client,
    base_url: Url,
    tokens: S,
}

impl<S: TokenStore> EventideClient<S> {
    pub fn new(base_url: Url, tokens: S) -> Self {
        Self::with_http(Client::new(), base_url, tokens)
    }

    /// Reuse an existing connection pool.
    pub fn with_http(http: Client, base_url: Url, tokens: S) -> Self {
        Self {
            http,
            base_url,
            tokens,
        }
    }

    fn api_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::debug!("no stored token, sending request unauthenticated");
                request
            }
        }
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.msg)
            .filter(|m| !m.trim().is_empty());
        tracing::debug!(status = status.as_u16(), ?message, "request rejected");
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = Self::check_status(request.send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_empty(request: RequestBuilder) -> Result<()> {
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    /// `POST /signup`. Returns the server's confirmation message.
    #[instrument(skip(self, request), fields(username = %request.username, role = %request.role))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<String> {
        let url = self.api_url("/signup")?;
        let response: MessageResponse = Self::send_json(self.http.post(url).json(request)).await?;
        tracing::info!("account created");
        Ok(response.msg)
    }

    /// `POST /login`. Stores the issued token before returning; a token that
    /// cannot be stored fails the login.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.api_url("/login")?;
        let body = LoginRequest { username, password };
        let response: LoginResponse = Self::send_json(self.http.post(url).json(&body)).await?;
        if let Err(e) = self.tokens.set_token(&response.access_token) {
            tracing::error!("login accepted but token not saved: {e}");
            return Err(e.into());
        }
        tracing::info!(role = %response.role, "logged in");
        Ok(response)
    }

    /// Forget the stored token. There is no server-side logout endpoint.
    pub fn logout(&self) {
        self.tokens.clear_token();
        tracing::info!("logged out");
    }

    /// `GET /{role}/profile`.
    #[instrument(skip(self))]
    pub async fn profile(&self, role: Role) -> Result<Profile> {
        let url = self.api_url(&format!("/{}/profile", role.as_str()))?;
        Self::send_json(self.authorized(self.http.get(url))).await
    }

    /// `GET /guest/invites`.
    #[instrument(skip(self))]
    pub async fn guest_invites(&self) -> Result<Vec<Invite>> {
        let url = self.api_url("/guest/invites")?;
        Self::send_json(self.authorized(self.http.get(url))).await
    }

    /// `POST /guest/invites/{id}/accept` or `.../decline`.
    #[instrument(skip(self))]
    pub async fn respond_to_invite(&self, id: i64, action: GuestAction) -> Result<()> {
        let url = self.api_url(&format!("/guest/invites/{id}/{}", action.endpoint()))?;
        Self::send_empty(self.authorized(self.http.post(url))).await?;
        tracing::info!(action = action.endpoint(), "invite answered");
        Ok(())
    }

    pub async fn accept_invite(&self, id: i64) -> Result<()> {
        self.respond_to_invite(id, GuestAction::Accept).await
    }

    pub async fn decline_invite(&self, id: i64) -> Result<()> {
        self.respond_to_invite(id, GuestAction::Decline).await
    }

    /// `GET /organizer/invites`.
    #[instrument(skip(self))]
    pub async fn organizer_invites(&self) -> Result<Vec<Invite>> {
        let url = self.api_url("/organizer/invites")?;
        Self::send_json(self.authorized(self.http.get(url))).await
    }

    /// `POST /organizer/invites`.
    #[instrument(skip(self, invite), fields(title = %invite.title, guest = %invite.guest_username))]
    pub async fn create_invite(&self, invite: &InviteFields) -> Result<()> {
        let url = self.api_url("/organizer/invites")?;
        Self::send_empty(self.authorized(self.http.post(url).json(invite))).await?;
        tracing::info!("invite created");
        Ok(())
    }

    /// `PUT /organizer/invites/{id}`.
    #[instrument(skip(self, invite), fields(title = %invite.title, guest = %invite.guest_username))]
    pub async fn update_invite(&self, id: i64, invite: &InviteFields) -> Result<()> {
        let url = self.api_url(&format!("/organizer/invites/{id}"))?;
        Self::send_empty(self.authorized(self.http.put(url).json(invite))).await?;
        tracing::info!("invite updated");
        Ok(())
    }

    /// `DELETE /organizer/invites/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_invite(&self, id: i64) -> Result<()> {
        let url = self.api_url(&format!("/organizer/invites/{id}"))?;
        Self::send_empty(self.authorized(self.http.delete(url))).await?;
        tracing::info!("invite deleted");
        Ok(())
    }

    /// `PUT /organizer/invites/{id}/reset`.
    #[instrument(skip(self))]
    pub async fn reset_invite(&self, id: i64) -> Result<()> {
        let url = self.api_url(&format!("/organizer/invites/{id}/reset"))?;
        Self::send_empty(self.authorized(self.http.put(url))).await?;
        tracing::info!("invite reset to pending");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::InviteStatus;
    use serde_json::json;
    use store::{FileTokenStore, MemoryTokenStore};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, tokens: MemoryTokenStore) -> EventideClient<MemoryTokenStore> {
        let base = parse_base_url(&server.uri()).unwrap();
        EventideClient::new(base, tokens)
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"username": "gina", "password": "secret"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok-123", "role": "guest"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tokens = MemoryTokenStore::new();
        let client = client_for(&server, tokens.clone());
        let resp = client.login("gina", "secret").await.unwrap();

        assert_eq!(resp.role(), Some(Role::Guest));
        assert_eq!(tokens.token().as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_login_failure_keeps_token_store_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "Bad credentials"})))
            .mount(&server)
            .await;

        let tokens = MemoryTokenStore::new();
        let client = client_for(&server, tokens.clone());
        let err = client.login("gina", "wrong").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.user_message("Error"), "Bad credentials");
        assert!(tokens.token().is_none());
    }

    #[tokio::test]
    async fn test_login_fails_when_token_cannot_be_saved() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok-123", "role": "guest"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = std::env::temp_dir().join(format!("eventide-login-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let tokens = FileTokenStore::new(blocker.join("access_token"));

        let base = parse_base_url(&server.uri()).unwrap();
        let client = EventideClient::new(base, &tokens);
        let err = client.login("gina", "secret").await.unwrap_err();

        assert!(matches!(err, ApiError::TokenStore(_)));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(tokens.token().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_signup_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .and(body_json(json!({
                "username": "olga",
                "email": "olga@example.com",
                "password": "pw",
                "role": "organizer",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"msg": "User created"})))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::new());
        let msg = client
            .signup(&SignupRequest {
                username: "olga".into(),
                email: "olga@example.com".into(),
                password: "pw".into(),
                role: Role::Organizer,
            })
            .await
            .unwrap();
        assert_eq!(msg, "User created");
    }

    #[tokio::test]
    async fn test_authorized_calls_carry_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizer/profile"))
            .and(header("authorization", "Bearer tok-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "username": "olga",
                "email": "olga@example.com",
                "role": "organizer",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("tok-9"));
        let profile = client.profile(Role::Organizer).await.unwrap();
        assert_eq!(profile.username, "olga");
        assert_eq!(profile.role, Role::Organizer);
    }

    #[tokio::test]
    async fn test_token_read_on_every_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guest/invites"))
            .and(header("authorization", "Bearer second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = MemoryTokenStore::with_token("first");
        let client = client_for(&server, tokens.clone());
        tokens.set_token("second").unwrap();

        assert!(client.guest_invites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_surfaces_server_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guest/invites"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"msg": "Missing Authorization Header"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::new());
        let err = client.guest_invites().await.unwrap_err();
        assert_eq!(err.server_message(), Some("Missing Authorization Header"));
    }

    #[tokio::test]
    async fn test_guest_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/guest/invites/4/accept"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/guest/invites/5/decline"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"));
        client.accept_invite(4).await.unwrap();
        client.decline_invite(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_state_conflict_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/guest/invites/4/accept"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"msg": "Invite already declined"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"));
        let err = client.accept_invite(4).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.user_message("Error accepting invite"), "Invite already declined");
    }

    #[tokio::test]
    async fn test_organizer_endpoints() {
        let server = MockServer::start().await;
        let fields = InviteFields {
            title: "Picnic".into(),
            description: "Bring food".into(),
            date: "2025-07-04".into(),
            guest_username: "gina".into(),
        };
        let wire = json!({
            "title": "Picnic",
            "description": "Bring food",
            "date": "2025-07-04",
            "guestUsername": "gina",
        });

        Mock::given(method("POST"))
            .and(path("/organizer/invites"))
            .and(body_json(wire.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"msg": "Invite created"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/organizer/invites/3"))
            .and(body_json(wire))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/organizer/invites/3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/organizer/invites/3/reset"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizer/invites"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 3,
                "title": "Picnic",
                "description": "Bring food",
                "date": "2025-07-04T00:00:00",
                "guest_username": "gina",
                "status": "declined",
            }])))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"));
        client.create_invite(&fields).await.unwrap();
        client.update_invite(3, &fields).await.unwrap();
        client.delete_invite(3).await.unwrap();
        client.reset_invite(3).await.unwrap();

        let invites = client.organizer_invites().await.unwrap();
        assert_eq!(invites.len(), 1);
        assert_eq!(invites[0].guest_label(), "gina");
        assert_eq!(invites[0].status, InviteStatus::Declined);
    }

    #[tokio::test]
    async fn test_error_without_json_body_has_no_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/organizer/invites/8"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"));
        let err = client.delete_invite(8).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, message: None }));
        assert_eq!(err.user_message("Failed to delete invite"), "Failed to delete invite");
    }

    #[tokio::test]
    async fn test_malformed_listing_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guest/invites"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
            .mount(&server)
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"));
        let err = client.guest_invites().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/guest/invites"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let base = parse_base_url(&format!("{}/api/", server.uri())).unwrap();
        let client = EventideClient::new(base, MemoryTokenStore::with_token("t"));
        client.guest_invites().await.unwrap();
    }

    #[test]
    fn test_logout_clears_token() {
        let tokens = MemoryTokenStore::with_token("t");
        let base = parse_base_url("http://localhost:5000").unwrap();
        let client = EventideClient::new(base, tokens.clone());
        client.logout();
        assert!(tokens.token().is_none());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(parse_base_url("localhost without scheme").is_err());
    }
}
