//! Process-wide login state: who is logged in and as what.
//!
//! Only the token outlives a reload (it sits in the [`TokenStore`]); a fresh
//! [`Session`] always starts logged out.

use store::TokenStore;

use crate::client::EventideClient;
use crate::error::Result;
use crate::models::Role;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// `None` while logged out, or when the server's role claim is unknown.
    pub role: Option<Role>,
    pub logged_in: bool,
}

/// Where the dashboard route should send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    GuestDashboard,
    OrganizerDashboard,
    UnknownRole,
}

impl Session {
    /// Exchange credentials for a token and role.
    ///
    /// On failure `self` is left untouched, so a logged-out session stays
    /// logged out.
    pub async fn log_in<S: TokenStore>(
        &mut self,
        client: &EventideClient<S>,
        username: &str,
        password: &str,
    ) -> Result<()> {
        let response = client.login(username, password).await?;
        let role = response.role();
        if role.is_none() {
            tracing::warn!(role = %response.role, "server sent an unknown role");
        }
        *self = Session {
            role,
            logged_in: true,
        };
        Ok(())
    }

    /// Drop the token and forget the role.
    pub fn log_out<S: TokenStore>(&mut self, client: &EventideClient<S>) {
        client.logout();
        *self = Session::default();
    }

    pub fn destination(&self) -> Destination {
        if !self.logged_in {
            return Destination::Login;
        }
        match self.role {
            Some(Role::Guest) => Destination::GuestDashboard,
            Some(Role::Organizer) => Destination::OrganizerDashboard,
            None => Destination::UnknownRole,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::client::parse_base_url;
    use store::MemoryTokenStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn login_server(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer, tokens: MemoryTokenStore) -> EventideClient<MemoryTokenStore> {
        let base = parse_base_url(&server.uri()).unwrap();
        EventideClient::new(base, tokens)
    }

    #[test]
    fn test_fresh_session_goes_to_login() {
        assert_eq!(Session::default().destination(), Destination::Login);
    }

    #[test]
    fn test_destination_by_role() {
        let guest = Session {
            role: Some(Role::Guest),
            logged_in: true,
        };
        let organizer = Session {
            role: Some(Role::Organizer),
            logged_in: true,
        };
        let unknown = Session {
            role: None,
            logged_in: true,
        };
        assert_eq!(guest.destination(), Destination::GuestDashboard);
        assert_eq!(organizer.destination(), Destination::OrganizerDashboard);
        assert_eq!(unknown.destination(), Destination::UnknownRole);
    }

    #[tokio::test]
    async fn test_log_in_sets_role() {
        let server = login_server(200, json!({"access_token": "tok", "role": "organizer"})).await;
        let client = client_for(&server, MemoryTokenStore::new());

        let mut session = Session::default();
        session.log_in(&client, "olga", "pw").await.unwrap();

        assert!(session.logged_in);
        assert_eq!(session.destination(), Destination::OrganizerDashboard);
    }

    #[tokio::test]
    async fn test_failed_login_stays_logged_out() {
        let server = login_server(401, json!({"msg": "Invalid username or password"})).await;
        let tokens = MemoryTokenStore::new();
        let client = client_for(&server, tokens.clone());

        let mut session = Session::default();
        let err = session.log_in(&client, "olga", "nope").await.unwrap_err();

        assert_eq!(err.user_message("Error"), "Invalid username or password");
        assert!(!session.logged_in);
        assert_eq!(session.destination(), Destination::Login);
        assert!(tokens.token().is_none());
    }

    #[tokio::test]
    async fn test_unsaved_token_stays_logged_out() {
        let server = login_server(200, json!({"access_token": "tok", "role": "guest"})).await;

        let dir = std::env::temp_dir().join(format!("eventide-session-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let tokens = store::FileTokenStore::new(blocker.join("access_token"));
        let client = EventideClient::new(parse_base_url(&server.uri()).unwrap(), &tokens);

        let mut session = Session::default();
        let err = session.log_in(&client, "gina", "pw").await.unwrap_err();

        assert_eq!(err.user_message("Error"), "Could not save your login on this device");
        assert_eq!(session.destination(), Destination::Login);
        assert!(tokens.token().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_unknown_role_still_logs_in() {
        let server = login_server(200, json!({"access_token": "tok", "role": "admin"})).await;
        let client = client_for(&server, MemoryTokenStore::new());

        let mut session = Session::default();
        session.log_in(&client, "root", "pw").await.unwrap();

        assert!(session.logged_in);
        assert_eq!(session.destination(), Destination::UnknownRole);
    }

    #[test]
    fn test_log_out_clears_everything() {
        let tokens = MemoryTokenStore::with_token("tok");
        let base = parse_base_url("http://localhost:5000").unwrap();
        let client = EventideClient::new(base, tokens.clone());

        let mut session = Session {
            role: Some(Role::Guest),
            logged_in: true,
        };
        session.log_out(&client);

        assert_eq!(session, Session::default());
        assert!(tokens.token().is_none());
    }
}
