//! Data models exchanged with the Invite Service.

mod invite;
mod user;

pub use invite::{Invite, InviteFields, InviteStatus};
pub(crate) use user::{LoginRequest, MessageResponse};
pub use user::{LoginResponse, Profile, Role, SignupRequest, UnknownRole};
