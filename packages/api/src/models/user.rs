//! # Accounts, roles and the auth payloads
//!
//! [`Role`] is the capability class fixed at signup. Everything that differs
//! between guests and organizers (profile path, dashboard, allowed actions)
//! dispatches on it with an exhaustive `match`.
//!
//! The request/response structs mirror the `/signup` and `/login` bodies
//! field for field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Client capability class, chosen at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Organizer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Guest, Role::Organizer];

    /// Wire value, also the first path segment of role-scoped endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Organizer => "organizer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Organizer => "Organizer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "organizer" => Ok(Role::Organizer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The current user as returned by `GET /{role}/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupRequest {
    /// Every text field has something other than whitespace in it.
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.email, &self.password]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
}

impl LoginResponse {
    /// The role claim, or `None` when the server sent something this client
    /// does not know.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// `{msg}` bodies returned by `/signup` and most mutations.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub msg: String,
}
