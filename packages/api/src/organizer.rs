//! # Organizer dashboard state
//!
//! [`OrganizerBoard`] holds the organizer's profile and invites plus the
//! state of the single create/edit form and the delete confirmation.
//!
//! - **Form**: [`begin_edit`](OrganizerBoard::begin_edit) copies an invite into
//!   the form and flips submit to an update of that invite's id. After a
//!   successful submit the form is emptied and editing ends.
//! - **Delete**: two steps, [`request_delete`](OrganizerBoard::request_delete)
//!   then [`confirm_delete`](OrganizerBoard::confirm_delete). On success the
//!   invite is dropped from the local list without a re-fetch.
//! - **Create, update, reset**: re-fetch the whole list via [`submit`] / [`reset`].

use store::TokenStore;

use crate::board::MutationOutcome;
use crate::client::EventideClient;
use crate::error::ApiError;
use crate::models::{Invite, InviteFields, Profile};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizerBoard {
    pub profile: Option<Profile>,
    pub invites: Vec<Invite>,
    pub form: InviteFields,
    /// The invite whose fields are loaded in the form, if any.
    pub editing: Option<Invite>,
    /// Invite awaiting delete confirmation.
    pub pending_delete: Option<i64>,
    pub message: Option<String>,
}

/// What submitting the form will do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(InviteFields),
    Update { id: i64, fields: InviteFields },
}

impl OrganizerBoard {
    pub fn apply_profile(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                tracing::error!("failed to fetch organizer profile: {e}");
                self.message = Some(e.user_message("Error fetching profile"));
            }
        }
    }

    pub fn apply_invites(&mut self, result: Result<Vec<Invite>, ApiError>) {
        match result {
            Ok(invites) => self.invites = invites,
            Err(e) => {
                tracing::error!("failed to fetch organizer invites: {e}");
                self.message = Some(e.user_message("Error fetching invites"));
            }
        }
    }

    pub fn begin_edit(&mut self, invite: &Invite) {
        self.form = InviteFields::from_invite(invite);
        self.editing = Some(invite.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.form = InviteFields::default();
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn form_heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Invite"
        } else {
            "Create Invite"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Invite"
        } else {
            "Create Invite"
        }
    }

    pub fn submission(&self) -> Submission {
        match &self.editing {
            Some(invite) => Submission::Update {
                id: invite.id,
                fields: self.form.clone(),
            },
            None => Submission::Create(self.form.clone()),
        }
    }

    /// The submission for the current form, or `None` with a message when a
    /// field is blank. Nothing is sent for an incomplete form.
    pub fn prepare_submit(&mut self) -> Option<Submission> {
        if !self.form.is_complete() {
            self.message = Some("All fields are required".to_string());
            return None;
        }
        self.message = None;
        Some(self.submission())
    }

    pub fn apply_submit(&mut self, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Rejected(e) => {
                tracing::error!("failed to save invite: {e}");
                self.message = Some(e.user_message("Error"));
            }
            MutationOutcome::Refetched(invites) => {
                self.cancel_edit();
                self.message = None;
                self.invites = invites;
            }
            MutationOutcome::RefetchFailed(e) => {
                self.cancel_edit();
                self.message = None;
                self.apply_invites(Err(e));
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the id awaiting confirmation.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    pub fn apply_delete(&mut self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.invites.retain(|invite| invite.id != id);
                if self.editing.as_ref().is_some_and(|invite| invite.id == id) {
                    self.cancel_edit();
                }
                self.message = None;
            }
            Err(e) => {
                tracing::error!("failed to delete invite {id}: {e}");
                self.message = Some(e.user_message("Failed to delete invite"));
            }
        }
    }

    pub fn apply_reset(&mut self, outcome: MutationOutcome) {
        match outcome {
            MutationOutcome::Rejected(e) => {
                tracing::error!("failed to reset invite: {e}");
                self.message = Some(e.user_message("Failed to reset status"));
            }
            MutationOutcome::Refetched(invites) => {
                self.message = None;
                self.invites = invites;
            }
            MutationOutcome::RefetchFailed(e) => self.apply_invites(Err(e)),
        }
    }
}

/// Create or update according to `submission`, then re-fetch.
pub async fn submit<S: TokenStore>(
    client: &EventideClient<S>,
    submission: &Submission,
) -> MutationOutcome {
    let mutation = async {
        match submission {
            Submission::Create(fields) => client.create_invite(fields).await,
            Submission::Update { id, fields } => client.update_invite(*id, fields).await,
        }
    };
    MutationOutcome::run(mutation, || client.organizer_invites()).await
}

/// Return invite `id` to pending, then re-fetch.
pub async fn reset<S: TokenStore>(client: &EventideClient<S>, id: i64) -> MutationOutcome {
    MutationOutcome::run(client.reset_invite(id), || client.organizer_invites()).await
}
