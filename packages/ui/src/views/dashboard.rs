use api::Destination;
use dioxus::prelude::*;

use crate::use_session;
use crate::views::{GuestDashboard, OrganizerDashboard, ProfileView};

#[component]
fn UnknownRole() -> Element {
    rsx! {
        p { class: "notice notice-error", "Unknown role" }
    }
}

/// Picks the guest or organizer dashboard from the session role.
///
/// Renders nothing while logged out; the platform layout handles the redirect.
#[component]
pub fn DashboardView() -> Element {
    let session = use_session();

    match session().destination() {
        Destination::Login => rsx! {},
        Destination::GuestDashboard => rsx! { GuestDashboard {} },
        Destination::OrganizerDashboard => rsx! { OrganizerDashboard {} },
        Destination::UnknownRole => rsx! { UnknownRole {} },
    }
}

/// Profile page for whichever role is logged in.
#[component]
pub fn SessionProfileView() -> Element {
    let session = use_session();

    match (session().destination(), session().role) {
        (Destination::Login, _) => rsx! {},
        (_, Some(role)) => rsx! { ProfileView { role } },
        (_, None) => rsx! { UnknownRole {} },
    }
}
