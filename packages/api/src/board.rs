//! Shared plumbing for the dashboard boards.
//!
//! A mutation is always followed by a full re-fetch of the invite list, never
//! an optimistic local edit (delete is the one exception, see
//! [`crate::OrganizerBoard::apply_delete`]). [`MutationOutcome`] records both
//! halves so the board can tell "the server refused" apart from "it worked but
//! the list could not be reloaded".

use std::future::Future;

use crate::error::ApiError;
use crate::models::Invite;

/// A line of feedback under a board. Success and failure are styled apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Failure(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Failure(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Failure(_))
    }
}

#[derive(Debug)]
pub enum MutationOutcome {
    /// The mutation itself failed; nothing changed server-side.
    Rejected(ApiError),
    /// The mutation succeeded and this is the freshly fetched list.
    Refetched(Vec<Invite>),
    /// The mutation succeeded but the follow-up fetch failed.
    RefetchFailed(ApiError),
}

impl MutationOutcome {
    /// Run `mutation`, then `refetch` only if it succeeded.
    pub(crate) async fn run<M, F, Fut>(mutation: M, refetch: F) -> Self
    where
        M: Future<Output = Result<(), ApiError>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Invite>, ApiError>>,
    {
        if let Err(e) = mutation.await {
            return MutationOutcome::Rejected(e);
        }
        match refetch().await {
            Ok(invites) => MutationOutcome::Refetched(invites),
            Err(e) => MutationOutcome::RefetchFailed(e),
        }
    }

    pub fn succeeded(&self) -> bool {
        !matches!(self, MutationOutcome::Rejected(_))
    }
}
