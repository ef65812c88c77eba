//! Organizer dashboard: profile, the create/edit form, and the invite list
//! with edit, confirmed delete and status reset.

use api::{
    organizer, organizer_actions, InviteStatus, MutationOutcome, OrganizerAction, OrganizerBoard,
    Role,
};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::components::{Button, ButtonVariant, Input, Notice, NoticeKind};
use crate::views::{ConfirmDialog, ProfileCard};

fn status_class(status: InviteStatus) -> &'static str {
    match status {
        InviteStatus::Pending => "status status--pending",
        InviteStatus::Accepted => "status status--accepted",
        InviteStatus::Declined => "status status--declined",
    }
}

fn action_variant(action: OrganizerAction) -> ButtonVariant {
    match action {
        OrganizerAction::Edit => ButtonVariant::Warning,
        OrganizerAction::Delete => ButtonVariant::Destructive,
        OrganizerAction::Reset => ButtonVariant::Info,
    }
}

#[component]
pub fn OrganizerDashboard() -> Element {
    let mut board = use_signal(OrganizerBoard::default);

    let _ = use_resource(move || async move {
        let client = match make_client() {
            Ok(client) => client,
            Err(e) => {
                board.write().apply_profile(Err(e));
                return;
            }
        };
        let profile = client.profile(Role::Organizer).await;
        board.write().apply_profile(profile);
        let invites = client.organizer_invites().await;
        board.write().apply_invites(invites);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = board.write().prepare_submit() else {
            return;
        };
        spawn(async move {
            let outcome = match make_client() {
                Ok(client) => organizer::submit(&client, &submission).await,
                Err(e) => MutationOutcome::Rejected(e),
            };
            board.write().apply_submit(outcome);
        });
    };

    let reset = move |id: i64| {
        spawn(async move {
            let outcome = match make_client() {
                Ok(client) => organizer::reset(&client, id).await,
                Err(e) => MutationOutcome::Rejected(e),
            };
            board.write().apply_reset(outcome);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = board.write().confirm_delete() else {
            return;
        };
        spawn(async move {
            let result = async { make_client()?.delete_invite(id).await }.await;
            board.write().apply_delete(id, result);
        });
    };

    let state = board();
    let heading = state.form_heading();
    let submit_label = state.submit_label();

    let invites = state.invites.iter().map(|invite| {
        let id = invite.id;
        let date = invite.date_only();
        let guest = invite.guest_label().to_string();
        let status = invite.status.label();
        let class = status_class(invite.status);
        let buttons = organizer_actions(invite.status).into_iter().map(|action| {
            let key = action.label();
            let target = invite.clone();
            rsx! {
                Button {
                    key: "{key}",
                    variant: action_variant(action),
                    class: "btn-grow",
                    onclick: move |_| match action {
                        OrganizerAction::Edit => board.write().begin_edit(&target),
                        OrganizerAction::Delete => board.write().request_delete(id),
                        OrganizerAction::Reset => reset(id),
                    },
                    {action.label()}
                }
            }
        });

        rsx! {
            div {
                key: "{id}",
                class: "invite",
                h4 { class: "invite-title", "{invite.title}" }
                p { "{invite.description}" }
                p { strong { "Date: " } "{date}" }
                p { strong { "Guest: " } "{guest}" }
                p {
                    strong { "Status: " }
                    span { class: class, "{status}" }
                }
                div { class: "button-group", {buttons} }
            }
        }
    });

    rsx! {
        div {
            class: "page page--organizer",
            h2 { class: "page-heading", "Organizer Dashboard" }

            if let Some(profile) = state.profile.clone() {
                ProfileCard { profile, heading: "Profile" }
            } else {
                section {
                    class: "card",
                    h3 { class: "card-heading", "Profile" }
                    p { class: "info", "Loading profile..." }
                }
            }

            section {
                class: "card",
                h3 { class: "card-heading", "{heading}" }
                form {
                    class: "invite-form",
                    onsubmit: handle_submit,

                    Input {
                        name: "title",
                        placeholder: "Title",
                        value: state.form.title.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| board.write().form.title = evt.value(),
                    }
                    Input {
                        name: "description",
                        placeholder: "Description",
                        value: state.form.description.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| board.write().form.description = evt.value(),
                    }
                    Input {
                        name: "date",
                        r#type: "date",
                        value: state.form.date.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| board.write().form.date = evt.value(),
                    }
                    Input {
                        name: "guestUsername",
                        placeholder: "Guest Username",
                        value: state.form.guest_username.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| board.write().form.guest_username = evt.value(),
                    }

                    div {
                        class: "button-group",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "btn-grow",
                            r#type: "submit",
                            "{submit_label}"
                        }
                        if state.is_editing() {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| board.write().cancel_edit(),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h3 { class: "card-heading", "Your Invites" }
                if state.invites.is_empty() {
                    p { class: "info", "No invites yet." }
                } else {
                    {invites}
                }
            }

            if let Some(text) = state.message.clone() {
                Notice { text, kind: NoticeKind::Error }
            }

            if state.pending_delete.is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this invite?",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| board.write().cancel_delete(),
                }
            }
        }
    }
}
