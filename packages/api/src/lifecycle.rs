//! # Invite lifecycle
//!
//! ```text
//!             accept (guest)
//!          ┌───────────────▶ accepted ─┐
//!  pending ┤                           ├─ reset (organizer) ─▶ pending
//!          └───────────────▶ declined ─┘
//!             decline (guest)
//! ```
//!
//! The Invite Service is the authority on these rules. The client uses this
//! module to decide which controls to render: guests see Accept/Decline only
//! on pending invites, organizers see Reset only on decided ones. A stale view
//! can still send a transition the server refuses; that comes back as an
//! [`crate::ApiError`] like any other failure.

use std::fmt;

use crate::models::InviteStatus;

/// A status change on an invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Accept,
    Decline,
    Reset,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transition::Accept => "accept",
            Transition::Decline => "decline",
            Transition::Reset => "reset",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {transition} an invite that is {from}")]
pub struct TransitionError {
    pub from: InviteStatus,
    pub transition: Transition,
}

impl InviteStatus {
    /// The status after `transition`, if it is allowed from here.
    pub fn apply(self, transition: Transition) -> Result<InviteStatus, TransitionError> {
        match (self, transition) {
            (InviteStatus::Pending, Transition::Accept) => Ok(InviteStatus::Accepted),
            (InviteStatus::Pending, Transition::Decline) => Ok(InviteStatus::Declined),
            (InviteStatus::Accepted | InviteStatus::Declined, Transition::Reset) => {
                Ok(InviteStatus::Pending)
            }
            (from, transition) => Err(TransitionError { from, transition }),
        }
    }
}

/// What a guest can do to an invite addressed to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestAction {
    Accept,
    Decline,
}

impl GuestAction {
    pub const ALL: [GuestAction; 2] = [GuestAction::Accept, GuestAction::Decline];

    pub fn transition(&self) -> Transition {
        match self {
            GuestAction::Accept => Transition::Accept,
            GuestAction::Decline => Transition::Decline,
        }
    }

    /// Last path segment of `POST /guest/invites/{id}/...`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            GuestAction::Accept => "accept",
            GuestAction::Decline => "decline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuestAction::Accept => "Accept",
            GuestAction::Decline => "Decline",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            GuestAction::Accept => "Invite accepted successfully!",
            GuestAction::Decline => "Invite declined successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            GuestAction::Accept => "Error accepting invite",
            GuestAction::Decline => "Error declining invite",
        }
    }
}

/// What an organizer can do to an invite they created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizerAction {
    Edit,
    Delete,
    Reset,
}

impl OrganizerAction {
    pub const ALL: [OrganizerAction; 3] = [
        OrganizerAction::Edit,
        OrganizerAction::Delete,
        OrganizerAction::Reset,
    ];

    /// The status change this action requests. Edit and delete leave the
    /// status alone and are available in every state.
    pub fn transition(&self) -> Option<Transition> {
        match self {
            OrganizerAction::Edit | OrganizerAction::Delete => None,
            OrganizerAction::Reset => Some(Transition::Reset),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganizerAction::Edit => "Edit",
            OrganizerAction::Delete => "Delete",
            OrganizerAction::Reset => "Reset Status",
        }
    }
}

/// Controls shown to the guest for an invite in `status`: every action
/// whose transition [`InviteStatus::apply`] allows.
pub fn guest_actions(status: InviteStatus) -> Vec<GuestAction> {
    GuestAction::ALL
        .into_iter()
        .filter(|action| status.apply(action.transition()).is_ok())
        .collect()
}

/// Controls shown to the organizer for an invite in `status`.
pub fn organizer_actions(status: InviteStatus) -> Vec<OrganizerAction> {
    OrganizerAction::ALL
        .into_iter()
        .filter(|action| match action.transition() {
            Some(transition) => status.apply(transition).is_ok(),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [InviteStatus; 3] = [
        InviteStatus::Pending,
        InviteStatus::Accepted,
        InviteStatus::Declined,
    ];

    #[test]
    fn test_guest_transitions_from_pending() {
        assert_eq!(
            InviteStatus::Pending.apply(Transition::Accept),
            Ok(InviteStatus::Accepted)
        );
        assert_eq!(
            InviteStatus::Pending.apply(Transition::Decline),
            Ok(InviteStatus::Declined)
        );
    }

    #[test]
    fn test_decided_invites_reject_guest_transitions() {
        for from in [InviteStatus::Accepted, InviteStatus::Declined] {
            for transition in [Transition::Accept, Transition::Decline] {
                assert_eq!(
                    from.apply(transition),
                    Err(TransitionError { from, transition })
                );
            }
        }
    }

    #[test]
    fn test_reset_only_from_decided() {
        assert_eq!(
            InviteStatus::Accepted.apply(Transition::Reset),
            Ok(InviteStatus::Pending)
        );
        assert_eq!(
            InviteStatus::Declined.apply(Transition::Reset),
            Ok(InviteStatus::Pending)
        );
        let err = InviteStatus::Pending.apply(Transition::Reset).unwrap_err();
        assert_eq!(err.to_string(), "cannot reset an invite that is pending");
    }

    #[test]
    fn test_guest_controls_only_on_pending() {
        for status in ALL_STATUSES {
            let actions = guest_actions(status);
            if status.is_pending() {
                assert_eq!(actions, vec![GuestAction::Accept, GuestAction::Decline]);
            } else {
                assert!(actions.is_empty(), "{status} should offer no guest actions");
            }
            // Every offered action is a legal transition
            for action in actions {
                assert!(status.apply(action.transition()).is_ok());
            }
        }
    }

    #[test]
    fn test_reset_control_only_when_decided() {
        for status in ALL_STATUSES {
            let has_reset = organizer_actions(status).contains(&OrganizerAction::Reset);
            assert_eq!(has_reset, !status.is_pending(), "reset visibility for {status}");
            assert_eq!(has_reset, status.apply(Transition::Reset).is_ok());
        }
    }

    #[test]
    fn test_edit_and_delete_always_offered() {
        for status in ALL_STATUSES {
            let actions = organizer_actions(status);
            assert!(actions.contains(&OrganizerAction::Edit));
            assert!(actions.contains(&OrganizerAction::Delete));
        }
    }

    #[test]
    fn test_controls_follow_transition_table() {
        for status in ALL_STATUSES {
            let guest: Vec<_> = GuestAction::ALL
                .into_iter()
                .filter(|a| status.apply(a.transition()).is_ok())
                .collect();
            assert_eq!(guest_actions(status), guest);

            for action in OrganizerAction::ALL {
                let offered = organizer_actions(status).contains(&action);
                let allowed = action
                    .transition()
                    .map_or(true, |t| status.apply(t).is_ok());
                assert_eq!(offered, allowed, "{action:?} on {status}");
            }
        }
        assert_eq!(
            organizer_actions(InviteStatus::Declined),
            OrganizerAction::ALL.to_vec()
        );
    }

    #[test]
    fn test_guest_action_wording() {
        assert_eq!(GuestAction::Accept.endpoint(), "accept");
        assert_eq!(GuestAction::Decline.endpoint(), "decline");
        assert_eq!(
            GuestAction::Decline.success_message(),
            "Invite declined successfully!"
        );
        assert_eq!(GuestAction::Accept.failure_message(), "Error accepting invite");
    }
}
