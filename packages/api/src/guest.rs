//! # Guest dashboard state
//!
//! [`GuestBoard`] is everything the guest view renders: the profile, the
//! invites addressed to this guest, and the last status message (success or
//! failure, so the view can style it). The view
//! fetches, hands each result to an `apply_*` method, and renders from the
//! board; answering an invite goes through [`respond`], which re-fetches the
//! whole list instead of patching the one item locally.

use store::TokenStore;

use crate::board::{MutationOutcome, StatusMessage};
use crate::client::EventideClient;
use crate::error::ApiError;
use crate::lifecycle::GuestAction;
use crate::models::{Invite, Profile};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestBoard {
    pub profile: Option<Profile>,
    pub invites: Vec<Invite>,
    pub message: Option<StatusMessage>,
}

/// What the guest view shows at the top level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuestView<'a> {
    /// The profile could not be loaded; only the message is shown.
    Failed(&'a str),
    Loading,
    Ready(&'a Profile),
}

impl GuestBoard {
    pub fn apply_profile(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                tracing::error!("failed to fetch guest profile: {e}");
                self.message = Some(StatusMessage::Failure(e.user_message("Error fetching profile")));
            }
        }
    }

    pub fn apply_invites(&mut self, result: Result<Vec<Invite>, ApiError>) {
        match result {
            Ok(invites) => self.invites = invites,
            Err(e) => {
                tracing::error!("failed to fetch guest invites: {e}");
                self.message = Some(StatusMessage::Failure(e.user_message("Error fetching invites")));
            }
        }
    }

    pub fn apply_response(&mut self, action: GuestAction, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Rejected(e) => {
                tracing::error!("failed to {} invite: {e}", action.endpoint());
                self.message = Some(StatusMessage::Failure(
                    e.user_message(action.failure_message()),
                ));
            }
            MutationOutcome::Refetched(invites) => {
                self.message = Some(StatusMessage::Success(action.success_message().to_string()));
                self.invites = invites;
            }
            MutationOutcome::RefetchFailed(e) => {
                self.message = Some(StatusMessage::Success(action.success_message().to_string()));
                self.apply_invites(Err(e));
            }
        }
    }

    pub fn view(&self) -> GuestView<'_> {
        match (&self.profile, &self.message) {
            (Some(profile), _) => GuestView::Ready(profile),
            (None, Some(message)) => GuestView::Failed(message.text()),
            (None, None) => GuestView::Loading,
        }
    }
}

/// Accept or decline invite `id`, then re-fetch the guest's invites.
pub async fn respond<S: TokenStore>(
    client: &EventideClient<S>,
    id: i64,
    action: GuestAction,
) -> MutationOutcome {
    MutationOutcome::run(client.respond_to_invite(id, action), || {
        client.guest_invites()
    })
    .await
}
