use api::{Profile, Role};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::components::{Notice, NoticeKind};

/// Username, email and role of the logged-in account.
#[component]
pub fn ProfileCard(
    profile: Profile,
    #[props(default = "Your Profile".to_string())] heading: String,
) -> Element {
    let role = profile.role.as_str();

    rsx! {
        section {
            class: "card",
            h3 { class: "card-heading", "{heading}" }
            p { class: "info", strong { "Username: " } "{profile.username}" }
            p { class: "info", strong { "Email: " } "{profile.email}" }
            p { class: "info", strong { "Role: " } "{role}" }
        }
    }
}

/// Standalone profile page for `role`, fetched from `GET /{role}/profile`.
#[component]
pub fn ProfileView(role: Role) -> Element {
    let profile = use_resource(move || async move {
        let result = async { make_client()?.profile(role).await }.await;
        if let Err(e) = &result {
            tracing::error!("failed to fetch {role} profile: {e}");
        }
        result
    });

    let heading = format!("{} Profile", role.label());

    let state = profile.read();
    let view = match &*state {
        None => rsx! {
            p { class: "loading", "Loading profile..." }
        },
        Some(Ok(profile)) => rsx! {
            div {
                class: "page page--profile",
                ProfileCard { profile: profile.clone(), heading }
            }
        },
        Some(Err(e)) => rsx! {
            Notice { text: e.user_message("Error fetching profile"), kind: NoticeKind::Error }
        },
    };
    view
}
