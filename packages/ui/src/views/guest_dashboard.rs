//! Guest dashboard: profile, invites addressed to this guest, accept/decline.

use api::{guest, guest_actions, GuestAction, GuestBoard, GuestView, MutationOutcome, Role};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::components::{Button, ButtonVariant, Notice, NoticeKind};
use crate::views::ProfileCard;

fn action_variant(action: GuestAction) -> ButtonVariant {
    match action {
        GuestAction::Accept => ButtonVariant::Success,
        GuestAction::Decline => ButtonVariant::Destructive,
    }
}

#[component]
pub fn GuestDashboard() -> Element {
    let mut board = use_signal(GuestBoard::default);

    let _ = use_resource(move || async move {
        let client = match make_client() {
            Ok(client) => client,
            Err(e) => {
                board.write().apply_profile(Err(e));
                return;
            }
        };
        let profile = client.profile(Role::Guest).await;
        board.write().apply_profile(profile);
        let invites = client.guest_invites().await;
        board.write().apply_invites(invites);
    });

    let answer = move |id: i64, action: GuestAction| {
        spawn(async move {
            let outcome = match make_client() {
                Ok(client) => guest::respond(&client, id, action).await,
                Err(e) => MutationOutcome::Rejected(e),
            };
            board.write().apply_response(action, outcome);
        });
    };

    let state = board();
    let profile = match state.view() {
        GuestView::Failed(message) => {
            return rsx! {
                Notice { text: message.to_string(), kind: NoticeKind::Error }
            };
        }
        GuestView::Loading => {
            return rsx! {
                p { class: "loading", "Loading profile..." }
            };
        }
        GuestView::Ready(profile) => profile.clone(),
    };

    let invites = state.invites.iter().map(|invite| {
        let id = invite.id;
        let date = invite.display_date();
        let organizer = invite.organizer_label().to_string();
        let status = invite.status.as_str();
        let buttons = guest_actions(invite.status).into_iter().map(move |action| {
            let key = action.endpoint();
            rsx! {
                Button {
                    key: "{key}",
                    variant: action_variant(action),
                    onclick: move |_| answer(id, action),
                    {action.label()}
                }
            }
        });

        rsx! {
            li {
                key: "{id}",
                class: "invite",
                h4 { class: "invite-title", "{invite.title}" }
                p { "{invite.description}" }
                p { strong { "Date: " } "{date}" }
                p { strong { "Organizer: " } "{organizer}" }
                p { strong { "Status: " } "{status}" }
                div { class: "button-group", {buttons} }
            }
        }
    });

    rsx! {
        div {
            class: "page page--guest",
            h2 { class: "page-heading", "Guest Dashboard" }

            ProfileCard { profile }

            section {
                class: "card",
                h3 { class: "card-heading", "Your Invites" }
                if state.invites.is_empty() {
                    p { class: "info", "No invites yet." }
                } else {
                    ul { class: "invite-list", {invites} }
                }
            }

            if let Some(message) = state.message.clone() {
                Notice {
                    text: message.text().to_string(),
                    kind: NoticeKind::from(&message),
                }
            }
        }
    }
}
