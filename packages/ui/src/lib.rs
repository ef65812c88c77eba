//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{configure, make_client, signup_delay};

pub mod views;

pub const EVENTIDE_CSS: Asset = asset!("/assets/eventide.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_session, LogoutButton, SessionProvider};
