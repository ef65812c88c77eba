//! # API crate: typed client and dashboard state for Eventide
//!
//! Eventide's backend is an external Invite Service; this crate is the only
//! place that talks to it. The UI crate renders what the types here describe
//! and calls the operations here on user actions.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`EventideClient`]: one method per REST endpoint, bearer token read from a [`store::TokenStore`] on each call |
//! | [`models`] | Wire types: [`Role`], [`Profile`], [`Invite`], [`InviteStatus`], [`InviteFields`], signup/login payloads |
//! | [`lifecycle`] | The pending/accepted/declined state machine and which controls each role sees per status |
//! | [`session`] | Process-wide [`Session`] (role + logged-in flag) and where the dashboard route leads |
//! | [`guest`] | [`GuestBoard`]: guest dashboard state, accept/decline followed by a re-fetch |
//! | [`organizer`] | [`OrganizerBoard`]: organizer dashboard state, shared create/edit form, confirmed delete, reset |
//! | [`error`] | [`ApiError`] and the uniform "server message or fallback" rule |
//!
//! ## Consistency model
//!
//! The server is the only writer of authoritative state. After every
//! mutation the boards re-fetch the full list rather than patching it, with
//! one exception: a confirmed delete removes the item locally.

pub mod board;
pub mod client;
pub mod error;
pub mod guest;
pub mod lifecycle;
pub mod models;
pub mod organizer;
pub mod session;

pub use board::{MutationOutcome, StatusMessage};
pub use client::{parse_base_url, EventideClient};
pub use error::{ApiError, ErrorKind};
pub use guest::{GuestBoard, GuestView};
pub use lifecycle::{guest_actions, organizer_actions, GuestAction, OrganizerAction, Transition};
pub use models::{Invite, InviteFields, InviteStatus, LoginResponse, Profile, Role, SignupRequest};
pub use organizer::{OrganizerBoard, Submission};
pub use session::{Destination, Session};
